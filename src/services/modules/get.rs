use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_module(
    service: &ModuleService,
    request: &HttpRequest,
    module_id: &str,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_detail(module_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Module retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "Module not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::ModuleNotFound)),
    }
}
