use serde::Serialize;
use ts_rs::TS;

use super::entities::Module;
use crate::models::activities::entities::Activity;

/// 模块详情（按 position 排序的活动）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub module: Module,
    pub activities: Vec<Activity>,
}
