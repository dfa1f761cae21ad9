use std::collections::HashSet;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ModuleService;
use crate::errors::HotsError;
use crate::models::modules::entities::Module;
use crate::models::modules::requests::CreateModuleRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_staff, error_response};
use crate::storage::Storage;
use crate::utils::validate::validate_title;

const TITLE_MAX_CHARS: usize = 200;

/// 校验并保存模块：活动不可重复且必须存在
pub async fn save_module(
    storage: &dyn Storage,
    created_by: &str,
    req: CreateModuleRequest,
) -> Result<Module, HotsError> {
    validate_title(&req.title, TITLE_MAX_CHARS).map_err(HotsError::validation)?;

    let mut seen = HashSet::new();
    for activity_id in &req.activity_ids {
        if !seen.insert(activity_id.as_str()) {
            return Err(HotsError::validation(format!(
                "Activity {activity_id} is listed more than once"
            )));
        }
        if storage.get_activity_by_id(activity_id).await?.is_none() {
            return Err(HotsError::not_found(format!(
                "Activity {activity_id} not found"
            )));
        }
    }

    storage.create_module(created_by, req).await
}

pub async fn create_module(
    service: &ModuleService,
    request: &HttpRequest,
    req: CreateModuleRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_staff(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match save_module(storage.as_ref(), &user.id, req).await {
        Ok(module) => {
            info!("Module {} created by {}", module.id, user.id);
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(module, "Module created successfully")))
        }
        Err(e @ HotsError::NotFound(_)) => Ok(error_response(&e, ErrorCode::ActivityNotFound)),
        Err(e) => Ok(error_response(&e, ErrorCode::BadRequest)),
    }
}
