use serde::Deserialize;
use ts_rs::TS;

/// 创建模块请求，activity_ids 的顺序即模块内顺序
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct CreateModuleRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub activity_ids: Vec<String>,
}
