use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;
use crate::models::evaluations::entities::EvaluationStatus;

/// 提交者信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionStudent {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// 教师视角的提交列表项
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub student: Option<SubmissionStudent>,
    pub total_score: Option<f64>,
    pub status: Option<EvaluationStatus>,
}

/// 提交作业的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentResponse {
    pub success: bool,
    pub submission: Submission,
}
