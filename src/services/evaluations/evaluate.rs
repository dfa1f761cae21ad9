use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::EvaluationService;
use crate::errors::HotsError;
use crate::models::evaluations::entities::TOTAL_SCORE_KEY;
use crate::models::evaluations::requests::{EvaluateSubmissionRequest, EvaluationUpsert};
use crate::models::evaluations::responses::EvaluationView;
use crate::models::evaluations::scoring::{build_evaluation_view, compute_total};
use crate::models::rubrics::entities::Rubric;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{current_staff, error_response};
use crate::storage::Storage;

/// 读取提交所属作业的量规
pub async fn rubric_for_submission(
    storage: &dyn Storage,
    assignment_id: &str,
) -> Result<Option<Rubric>, HotsError> {
    let Some(assignment) = storage.get_assignment_by_id(assignment_id).await? else {
        return Ok(None);
    };
    match assignment.rubric_id {
        Some(ref rubric_id) => storage.get_rubric_by_id(rubric_id).await,
        None => Ok(None),
    }
}

/// 评价提交：按量规计算总分并保存，同一提交重复评价时覆盖
pub async fn evaluate_submission(
    storage: &dyn Storage,
    evaluator: &User,
    submission_id: &str,
    req: EvaluateSubmissionRequest,
) -> Result<EvaluationView, HotsError> {
    let submission = storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| HotsError::not_found(format!("Submission {submission_id} not found")))?;

    if submission.is_draft {
        return Err(HotsError::validation("Draft submissions cannot be evaluated"));
    }

    let rubric = rubric_for_submission(storage, &submission.assignment_id)
        .await?
        .ok_or_else(|| HotsError::validation("Assignment has no rubric to evaluate against"))?;

    req.validate_against(&rubric).map_err(HotsError::validation)?;

    let total = compute_total(
        &rubric,
        req.scores.iter().map(|(id, score)| (id.as_str(), *score)),
    );
    let mut scores = req.scores;
    scores.insert(TOTAL_SCORE_KEY.to_string(), total);

    let evaluation = storage
        .upsert_evaluation(EvaluationUpsert {
            submission_id: submission.id,
            evaluator_id: evaluator.id.clone(),
            scores,
            feedback: req.feedback,
            general_feedback: req
                .general_feedback
                .filter(|text| !text.trim().is_empty()),
        })
        .await?;

    Ok(build_evaluation_view(&evaluation, Some(&rubric)))
}

pub async fn handle_evaluate(
    service: &EvaluationService,
    request: &HttpRequest,
    submission_id: &str,
    req: EvaluateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let user = match current_staff(request) {
        Ok(user) => user,
        Err(response) => return Ok(response),
    };
    let storage = service.get_storage(request);

    match evaluate_submission(storage.as_ref(), &user, submission_id, req).await {
        Ok(view) => {
            info!(
                "Submission {} evaluated by {}: {} ({})",
                submission_id, user.id, view.total_score, view.status
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                view,
                "Evaluation saved successfully",
            )))
        }
        Err(e) => {
            warn!("Failed to evaluate submission {}: {}", submission_id, e);
            let code = match e {
                HotsError::NotFound(_) => ErrorCode::SubmissionNotFound,
                HotsError::Validation(_) => ErrorCode::EvaluationInvalid,
                _ => ErrorCode::EvaluationFailed,
            };
            Ok(error_response(&e, code))
        }
    }
}
