use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::errors::HotsError;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::responses::AssignmentDetail;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, error_response};
use crate::storage::Storage;

/// 读取作业，学生只能看到已发布的作业
pub async fn find_visible_assignment(
    storage: &dyn Storage,
    user: &User,
    assignment_id: &str,
) -> Result<Assignment, HotsError> {
    match storage.get_assignment_by_id(assignment_id).await? {
        Some(assignment) if assignment.is_published || user.role.is_staff() => Ok(assignment),
        _ => Err(HotsError::not_found(format!(
            "Assignment {assignment_id} not found"
        ))),
    }
}

pub async fn load_assignment_detail(
    storage: &dyn Storage,
    assignment: Assignment,
) -> Result<AssignmentDetail, HotsError> {
    let rubric = match assignment.rubric_id {
        Some(ref id) => storage.get_rubric_by_id(id).await?,
        None => None,
    };
    let activity = match assignment.activity_id {
        Some(ref id) => storage.get_activity_by_id(id).await?,
        None => None,
    };
    let module = match assignment.module_id {
        Some(ref id) => storage.get_module_detail(id).await?,
        None => None,
    };

    Ok(AssignmentDetail {
        assignment,
        rubric,
        activity,
        module,
    })
}

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: &str,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    let assignment = match find_visible_assignment(storage.as_ref(), &user, assignment_id).await {
        Ok(assignment) => assignment,
        Err(e) => return Ok(error_response(&e, ErrorCode::AssignmentNotFound)),
    };

    match load_assignment_detail(storage.as_ref(), assignment).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Assignment retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::AssignmentNotFound)),
    }
}
