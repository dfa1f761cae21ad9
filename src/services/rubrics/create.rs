use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::RubricService;
use crate::errors::HotsError;
use crate::models::rubrics::entities::Rubric;
use crate::models::rubrics::requests::CreateRubricRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_staff, error_response};
use crate::storage::Storage;

/// 校验权重与等级后保存量规
pub async fn save_rubric(
    storage: &dyn Storage,
    created_by: &str,
    req: CreateRubricRequest,
) -> Result<Rubric, HotsError> {
    req.validate().map_err(HotsError::validation)?;
    storage.create_rubric(created_by, req).await
}

pub async fn create_rubric(
    service: &RubricService,
    request: &HttpRequest,
    req: CreateRubricRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_staff(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match save_rubric(storage.as_ref(), &user.id, req).await {
        Ok(rubric) => {
            info!("Rubric {} created by {}", rubric.id, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(rubric, "Rubric created successfully")))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::RubricInvalid)),
    }
}
