use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::RubricService;
use crate::models::rubrics::requests::RubricListParams;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn list_rubrics(
    service: &RubricService,
    request: &HttpRequest,
    params: RubricListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_rubrics_with_pagination(params).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Rubric list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::InternalServerError)),
    }
}
