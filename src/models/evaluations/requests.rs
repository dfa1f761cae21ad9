use std::collections::BTreeMap;

use serde::Deserialize;
use ts_rs::TS;

use super::entities::TOTAL_SCORE_KEY;
use crate::models::rubrics::entities::{Rubric, SCORE_LEVELS};

/// 评价提交请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/evaluation.ts")]
pub struct EvaluateSubmissionRequest {
    /// 评分标准 id -> 等级（1–4）
    pub scores: BTreeMap<String, f64>,
    #[serde(default)]
    pub feedback: BTreeMap<String, String>,
    pub general_feedback: Option<String>,
}

impl EvaluateSubmissionRequest {
    /// 按量规校验：每个评分标准都需给分，等级为 1–4 的整数
    pub fn validate_against(&self, rubric: &Rubric) -> Result<(), String> {
        if rubric.criterion(TOTAL_SCORE_KEY).is_some() {
            return Err(format!(
                "Rubric uses the reserved criterion id '{TOTAL_SCORE_KEY}' and cannot be scored"
            ));
        }
        for id in self.scores.keys().chain(self.feedback.keys()) {
            if rubric.criterion(id).is_none() {
                return Err(format!("Unknown criterion: {id}"));
            }
        }

        for criterion in &rubric.criteria {
            let Some(score) = self.scores.get(&criterion.id) else {
                return Err(format!("Missing score for criterion '{}'", criterion.name));
            };
            if score.fract() != 0.0 || *score < 1.0 || *score > SCORE_LEVELS as f64 {
                return Err(format!(
                    "Score for criterion '{}' must be an integer level between 1 and {SCORE_LEVELS}",
                    criterion.name
                ));
            }
        }

        Ok(())
    }
}

// 存储层使用的评价写入参数
#[derive(Debug, Clone)]
pub struct EvaluationUpsert {
    pub submission_id: String,
    pub evaluator_id: String,
    pub scores: BTreeMap<String, f64>,
    pub feedback: BTreeMap<String, String>,
    pub general_feedback: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::rubrics::entities::Criterion;

    fn rubric(ids: &[&str]) -> Rubric {
        let now = chrono::Utc::now();
        let weight = 100.0 / ids.len() as f64;
        Rubric {
            id: "r1".to_string(),
            title: "Debate speech".to_string(),
            description: None,
            criteria: ids
                .iter()
                .map(|id| Criterion {
                    id: id.to_string(),
                    name: id.to_string(),
                    description: String::new(),
                    weight,
                    levels: vec![],
                })
                .collect(),
            max_score: 100.0,
            created_by: "t1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn request(scores: &[(&str, f64)]) -> EvaluateSubmissionRequest {
        EvaluateSubmissionRequest {
            scores: scores.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
            feedback: BTreeMap::new(),
            general_feedback: None,
        }
    }

    #[test]
    fn test_accepts_complete_integer_levels() {
        let req = request(&[("c1", 1.0), ("c2", 4.0)]);
        assert!(req.validate_against(&rubric(&["c1", "c2"])).is_ok());
    }

    #[test]
    fn test_rejects_score_keyed_total() {
        let req = request(&[("c1", 2.0), ("total", 3.0)]);
        let err = req.validate_against(&rubric(&["c1"])).unwrap_err();
        assert!(err.contains("Unknown criterion"));
    }

    #[test]
    fn test_rejects_stored_rubric_with_total_criterion() {
        let req = request(&[("total", 1.0), ("other", 1.0)]);
        let err = req
            .validate_against(&rubric(&["total", "other"]))
            .unwrap_err();
        assert!(err.contains("reserved"));
    }

    #[test]
    fn test_rejects_fractional_level() {
        let req = request(&[("c1", 2.5)]);
        assert!(req.validate_against(&rubric(&["c1"])).is_err());
    }
}
