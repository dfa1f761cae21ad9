use serde::Serialize;
use ts_rs::TS;

use super::entities::EvaluationStatus;

/// 单个评分标准的得分明细
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct CriterionBreakdown {
    pub criterion_id: String,
    pub name: String,
    pub weight: f64,
    pub score: Option<f64>,
    pub points: f64,
    pub feedback: Option<String>,
}

/// 评价展示视图
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluationView {
    pub evaluation_id: String,
    pub submission_id: String,
    pub total_score: f64,
    pub max_score: f64,
    pub score_percentage: f64,
    pub status: EvaluationStatus,
    pub general_feedback: Option<String>,
    pub criteria: Vec<CriterionBreakdown>,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
}
