use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// scores 中保存总分的键
pub const TOTAL_SCORE_KEY: &str = "total";

/// 评价展示状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub enum EvaluationStatus {
    #[serde(rename = "Lulus")]
    Passed,
    #[serde(rename = "Perlu Perbaikan")]
    NeedsImprovement,
    #[serde(rename = "Perlu Revisi")]
    NeedsRevision,
}

impl EvaluationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EvaluationStatus::Passed => "Lulus",
            EvaluationStatus::NeedsImprovement => "Perlu Perbaikan",
            EvaluationStatus::NeedsRevision => "Perlu Revisi",
        }
    }
}

impl std::fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 教师对一次提交的评价
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct Evaluation {
    pub id: String,
    pub submission_id: String,
    pub evaluator_id: String,
    /// 评分标准 id -> 等级分（1–4），另含 "total" 总分
    pub scores: BTreeMap<String, f64>,
    /// 评分标准 id -> 评语
    pub feedback: BTreeMap<String, String>,
    pub general_feedback: Option<String>,
    pub evaluated_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Evaluation {
    /// 总分，缺失或非法时为 0
    pub fn total_score(&self) -> f64 {
        self.scores
            .get(TOTAL_SCORE_KEY)
            .copied()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}
