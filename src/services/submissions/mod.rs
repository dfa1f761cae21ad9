pub mod detail;
pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::models::submissions::requests::SubmitAssignmentRequest;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 保存草稿或提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: &str,
        req: SubmitAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        submit::handle_submit(self, request, assignment_id, req).await
    }

    /// 获取提交详情
    pub async fn get_submission(
        &self,
        request: &HttpRequest,
        submission_id: &str,
    ) -> ActixResult<HttpResponse> {
        detail::get_submission(self, request, submission_id).await
    }

    /// 获取当前学生在作业下的最新提交
    pub async fn get_my_latest_submission(
        &self,
        request: &HttpRequest,
        assignment_id: &str,
    ) -> ActixResult<HttpResponse> {
        detail::get_my_latest_submission(self, request, assignment_id).await
    }

    /// 教师查看作业的全部提交
    pub async fn list_assignment_submissions(
        &self,
        request: &HttpRequest,
        assignment_id: &str,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_assignment_submissions(self, request, assignment_id, query).await
    }
}
