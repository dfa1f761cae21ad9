pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::rubrics::requests::{CreateRubricRequest, RubricListParams};
use crate::storage::Storage;

pub struct RubricService {
    storage: Option<Arc<dyn Storage>>,
}

impl RubricService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 创建量规
    pub async fn create_rubric(
        &self,
        request: &HttpRequest,
        req: CreateRubricRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_rubric(self, request, req).await
    }

    /// 获取量规（完整 JSON 亦用于导出）
    pub async fn get_rubric(
        &self,
        request: &HttpRequest,
        rubric_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_rubric(self, request, rubric_id).await
    }

    pub async fn list_rubrics(
        &self,
        request: &HttpRequest,
        params: RubricListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_rubrics(self, request, params).await
    }
}
