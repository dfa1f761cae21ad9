pub mod evaluate;
pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::EvaluateSubmissionRequest;
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 教师按量规评价提交
    pub async fn evaluate_submission(
        &self,
        request: &HttpRequest,
        submission_id: &str,
        req: EvaluateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        evaluate::handle_evaluate(self, request, submission_id, req).await
    }

    /// 获取提交的评价结果
    pub async fn get_submission_evaluation(
        &self,
        request: &HttpRequest,
        submission_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_submission_evaluation(self, request, submission_id).await
    }
}
