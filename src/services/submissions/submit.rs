use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::SubmissionService;
use crate::errors::HotsError;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::SubmitAssignmentRequest;
use crate::models::submissions::responses::SubmitAssignmentResponse;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::assignments::detail::find_visible_assignment;
use crate::services::{current_user, error_response};
use crate::storage::Storage;

/// 保存草稿或正式提交
///
/// 带 `submission_id` 时更新原提交（不会新建第二行），否则新建提交。
/// 草稿不设置 `submitted_at`；正式提交时设为当前时间。
pub async fn submit_assignment(
    storage: &dyn Storage,
    student: &User,
    assignment_id: &str,
    req: SubmitAssignmentRequest,
) -> Result<Submission, HotsError> {
    let assignment = find_visible_assignment(storage, student, assignment_id).await?;
    let upsert = req.into_upsert(&assignment.id, &student.id);
    storage.upsert_submission(upsert).await
}

pub async fn handle_submit(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: &str,
    req: SubmitAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);
    let is_draft = req.is_draft;

    match submit_assignment(storage.as_ref(), &user, assignment_id, req).await {
        Ok(submission) => {
            info!(
                "Submission {} saved for assignment {} by {} (draft: {})",
                submission.id, assignment_id, user.id, is_draft
            );
            let message = if is_draft {
                "Draft saved successfully"
            } else {
                "Assignment submitted successfully"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SubmitAssignmentResponse {
                    success: true,
                    submission,
                },
                message,
            )))
        }
        Err(e) => {
            warn!(
                "Failed to save submission for assignment {}: {}",
                assignment_id, e
            );
            Ok(error_response(&e, ErrorCode::SubmissionFailed))
        }
    }
}
