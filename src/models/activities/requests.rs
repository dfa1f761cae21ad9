use serde::Deserialize;
use ts_rs::TS;

use super::entities::{ActivityType, HotsLevel};
use crate::models::common::PaginationQuery;

/// 创建活动请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct CreateActivityRequest {
    pub title: String,
    pub description: Option<String>,
    pub instructions: Option<String>,
    pub activity_type: ActivityType,
    pub hots_level: HotsLevel,
    pub content: Option<String>,
}

/// 活动列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct ActivityListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
    pub activity_type: Option<ActivityType>,
}
