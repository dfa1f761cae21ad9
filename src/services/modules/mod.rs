pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::PaginationQuery;
use crate::models::modules::requests::CreateModuleRequest;
use crate::storage::Storage;

pub struct ModuleService {
    storage: Option<Arc<dyn Storage>>,
}

impl ModuleService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 创建学习模块
    pub async fn create_module(
        &self,
        request: &HttpRequest,
        req: CreateModuleRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_module(self, request, req).await
    }

    /// 获取模块及其有序活动
    pub async fn get_module(
        &self,
        request: &HttpRequest,
        module_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_module(self, request, module_id).await
    }

    pub async fn list_modules(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_modules(self, request, query).await
    }
}
