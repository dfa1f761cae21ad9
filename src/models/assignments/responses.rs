use serde::Serialize;
use ts_rs::TS;

use super::entities::Assignment;
use crate::models::activities::entities::Activity;
use crate::models::modules::responses::ModuleDetail;
use crate::models::rubrics::entities::Rubric;

/// 作业详情
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub rubric: Option<Rubric>,
    pub activity: Option<Activity>,
    pub module: Option<ModuleDetail>,
}
