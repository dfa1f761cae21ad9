use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_user, error_response};

/// 提交者本人、教师和管理员可查看提交
pub fn can_view_submission(user: &User, submission: &Submission) -> bool {
    user.role.is_staff() || submission.student_id == user.id
}

pub async fn get_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    submission_id: &str,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) if can_view_submission(&user, &submission) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(
                submission,
                "Submission retrieved successfully",
            ))),
        Ok(Some(_)) => Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "You can only view your own submissions",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::SubmissionNotFound)),
    }
}

pub async fn get_my_latest_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: &str,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    // 尚未提交时 data 为 null
    match storage.get_latest_submission(assignment_id, &user.id).await {
        Ok(submission) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submission,
            "Latest submission retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::SubmissionNotFound)),
    }
}
