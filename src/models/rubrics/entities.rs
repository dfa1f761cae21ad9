use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 评分等级数量（1–4）
pub const SCORE_LEVELS: u8 = 4;

/// 量规中的评分等级
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct ScoreLevel {
    pub level: u8,
    #[serde(default)]
    pub description: String,
    pub points: f64,
}

/// 评分标准
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct Criterion {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// 百分比权重，同一量规内合计 100
    pub weight: f64,
    #[serde(default)]
    pub levels: Vec<ScoreLevel>,
}

/// 评分量规
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct Rubric {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub criteria: Vec<Criterion>,
    pub max_score: f64,
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Rubric {
    pub fn criterion(&self, id: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id == id)
    }
}
