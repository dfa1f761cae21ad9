pub mod create;
pub mod get;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::activities::requests::{ActivityListParams, CreateActivityRequest};
use crate::storage::Storage;

pub struct ActivityService {
    storage: Option<Arc<dyn Storage>>,
}

impl ActivityService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        match &self.storage {
            Some(storage) => storage.clone(),
            None => super::storage_from_request(request),
        }
    }

    /// 创建学习活动
    pub async fn create_activity(
        &self,
        request: &HttpRequest,
        req: CreateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_activity(self, request, req).await
    }

    pub async fn get_activity(
        &self,
        request: &HttpRequest,
        activity_id: &str,
    ) -> ActixResult<HttpResponse> {
        get::get_activity(self, request, activity_id).await
    }

    pub async fn list_activities(
        &self,
        request: &HttpRequest,
        params: ActivityListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_activities(self, request, params).await
    }
}
