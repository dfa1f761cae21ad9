use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_activity(
    service: &ActivityService,
    request: &HttpRequest,
    activity_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_activity_by_id(activity_id).await {
        Ok(Some(activity)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            activity,
            "Activity retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ActivityNotFound,
            "Activity not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ActivityNotFound)),
    }
}
