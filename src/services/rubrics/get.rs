use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_rubric(
    service: &RubricService,
    request: &HttpRequest,
    rubric_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_rubric_by_id(rubric_id).await {
        Ok(Some(rubric)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            rubric,
            "Rubric retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::RubricNotFound,
            "Rubric not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::RubricNotFound)),
    }
}
