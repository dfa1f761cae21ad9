use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::EvaluationService;
use super::evaluate::rubric_for_submission;
use crate::errors::HotsError;
use crate::models::evaluations::responses::EvaluationView;
use crate::models::evaluations::scoring::build_evaluation_view;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::submissions::detail::can_view_submission;
use crate::services::{current_user, error_response};
use crate::storage::Storage;

/// 读取提交的评价视图，尚未评价时返回 None
pub async fn load_evaluation_view(
    storage: &dyn Storage,
    viewer: &User,
    submission_id: &str,
) -> Result<Option<EvaluationView>, HotsError> {
    let submission = storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| HotsError::not_found(format!("Submission {submission_id} not found")))?;

    if !can_view_submission(viewer, &submission) {
        return Err(HotsError::authorization(
            "You can only view evaluations of your own submissions",
        ));
    }

    let Some(evaluation) = storage.get_evaluation_by_submission_id(submission_id).await? else {
        return Ok(None);
    };
    let rubric = rubric_for_submission(storage, &submission.assignment_id).await?;

    Ok(Some(build_evaluation_view(&evaluation, rubric.as_ref())))
}

pub async fn get_submission_evaluation(
    service: &EvaluationService,
    request: &HttpRequest,
    submission_id: &str,
) -> ActixResult<HttpResponse> {
    let user = match current_user(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match load_evaluation_view(storage.as_ref(), &user, submission_id).await {
        Ok(Some(view)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            view,
            "Evaluation retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            "Submission has not been evaluated yet",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::SubmissionNotFound)),
    }
}
