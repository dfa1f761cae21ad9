use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::models::activities::requests::ActivityListParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn list_activities(
    service: &ActivityService,
    request: &HttpRequest,
    params: ActivityListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_activities_with_pagination(params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Activity list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::InternalServerError)),
    }
}
