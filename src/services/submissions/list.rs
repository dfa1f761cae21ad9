use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::models::{ApiResponse, ErrorCode, PaginationQuery};
use crate::services::{current_staff, error_response};

pub async fn list_assignment_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: &str,
    query: PaginationQuery,
) -> ActixResult<HttpResponse> {
    if let Err(response) = current_staff(request) {
        return Ok(response);
    }
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, ErrorCode::AssignmentNotFound)),
    }

    match storage
        .list_submissions_by_assignment(assignment_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Submission list retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, ErrorCode::InternalServerError)),
    }
}
