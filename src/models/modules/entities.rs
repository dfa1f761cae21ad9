use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 模块实体：有序的活动集合
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct Module {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
