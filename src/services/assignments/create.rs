use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::errors::HotsError;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_staff, error_response};
use crate::storage::Storage;

/// 校验并保存作业，引用的活动、模块、量规必须存在
pub async fn save_assignment(
    storage: &dyn Storage,
    created_by: &str,
    req: CreateAssignmentRequest,
) -> Result<Assignment, HotsError> {
    req.validate().map_err(HotsError::validation)?;

    if let Some(ref activity_id) = req.activity_id
        && storage.get_activity_by_id(activity_id).await?.is_none()
    {
        return Err(HotsError::not_found(format!(
            "Activity {activity_id} not found"
        )));
    }
    if let Some(ref module_id) = req.module_id
        && storage.get_module_detail(module_id).await?.is_none()
    {
        return Err(HotsError::not_found(format!("Module {module_id} not found")));
    }
    if let Some(ref rubric_id) = req.rubric_id
        && storage.get_rubric_by_id(rubric_id).await?.is_none()
    {
        return Err(HotsError::not_found(format!("Rubric {rubric_id} not found")));
    }

    storage.create_assignment(created_by, req).await
}

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_staff(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match save_assignment(storage.as_ref(), &user.id, req).await {
        Ok(assignment) => {
            info!("Assignment {} created by {}", assignment.id, user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment created successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, ErrorCode::AssignmentInvalid)),
    }
}
