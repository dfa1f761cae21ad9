use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ActivityService;
use crate::errors::HotsError;
use crate::models::activities::entities::Activity;
use crate::models::activities::requests::CreateActivityRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_staff, error_response};
use crate::storage::Storage;
use crate::utils::validate::validate_title;

const TITLE_MAX_CHARS: usize = 200;

/// 校验并保存学习活动
pub async fn save_activity(
    storage: &dyn Storage,
    created_by: &str,
    req: CreateActivityRequest,
) -> Result<Activity, HotsError> {
    validate_title(&req.title, TITLE_MAX_CHARS).map_err(HotsError::validation)?;
    storage.create_activity(created_by, req).await
}

pub async fn create_activity(
    service: &ActivityService,
    request: &HttpRequest,
    req: CreateActivityRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_staff(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match save_activity(storage.as_ref(), &user.id, req).await {
        Ok(activity) => {
            info!("Activity {} created by {}", activity.id, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(activity, "Activity created successfully")))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::BadRequest)),
    }
}
