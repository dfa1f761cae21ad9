use std::collections::HashSet;

use serde::Deserialize;
use ts_rs::TS;

use super::entities::{Criterion, SCORE_LEVELS, ScoreLevel};
use crate::models::evaluations::entities::TOTAL_SCORE_KEY;
use crate::models::common::PaginationQuery;

const WEIGHT_TOTAL: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 0.01;

/// 创建量规时的评分标准输入（id 可省略）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CriterionInput {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub weight: f64,
    #[serde(default)]
    pub levels: Vec<ScoreLevel>,
}

/// 创建量规请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct CreateRubricRequest {
    pub title: String,
    pub description: Option<String>,
    #[serde(default = "default_max_score")]
    pub max_score: f64,
    pub criteria: Vec<CriterionInput>,
}

fn default_max_score() -> f64 {
    100.0
}

/// 量规列表查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/rubric.ts")]
pub struct RubricListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

impl CreateRubricRequest {
    /// 写入前校验，返回第一条错误信息
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Rubric title is required".to_string());
        }
        if !(self.max_score.is_finite() && self.max_score > 0.0) {
            return Err("Max score must be greater than 0".to_string());
        }
        if self.criteria.is_empty() {
            return Err("Rubric must contain at least one criterion".to_string());
        }

        let mut ids = HashSet::new();
        for criterion in &self.criteria {
            if criterion.name.trim().is_empty() {
                return Err("Criterion name is required".to_string());
            }
            if !(criterion.weight > 0.0 && criterion.weight <= WEIGHT_TOTAL) {
                return Err(format!(
                    "Criterion '{}' weight must be within (0, 100]",
                    criterion.name
                ));
            }
            if let Some(id) = criterion.id.as_deref() {
                // 评分表中 "total" 保存总分
                if id == TOTAL_SCORE_KEY {
                    return Err(format!("Criterion id '{TOTAL_SCORE_KEY}' is reserved"));
                }
                if !ids.insert(id) {
                    return Err(format!("Duplicate criterion id: {id}"));
                }
            }

            let mut levels = HashSet::new();
            for level in &criterion.levels {
                if level.level == 0 || level.level > SCORE_LEVELS {
                    return Err(format!(
                        "Criterion '{}' has level {} outside 1-{SCORE_LEVELS}",
                        criterion.name, level.level
                    ));
                }
                if !levels.insert(level.level) {
                    return Err(format!(
                        "Criterion '{}' repeats level {}",
                        criterion.name, level.level
                    ));
                }
            }
        }

        let total: f64 = self.criteria.iter().map(|c| c.weight).sum();
        if (total - WEIGHT_TOTAL).abs() > WEIGHT_TOLERANCE {
            return Err(format!("Criterion weights must sum to 100 (got {total})"));
        }

        Ok(())
    }

    /// 转换为存储用的评分标准，缺失的 id 自动生成
    pub fn into_criteria(self) -> Vec<Criterion> {
        self.criteria
            .into_iter()
            .map(|input| {
                let mut levels = input.levels;
                levels.sort_by_key(|l| l.level);
                Criterion {
                    id: input
                        .id
                        .filter(|id| !id.trim().is_empty())
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    name: input.name.trim().to_string(),
                    description: input.description,
                    weight: input.weight,
                    levels,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(name: &str, weight: f64) -> CriterionInput {
        CriterionInput {
            id: None,
            name: name.to_string(),
            description: String::new(),
            weight,
            levels: (1..=4)
                .map(|level| ScoreLevel {
                    level,
                    description: String::new(),
                    points: level as f64 * 25.0,
                })
                .collect(),
        }
    }

    fn request(criteria: Vec<CriterionInput>) -> CreateRubricRequest {
        CreateRubricRequest {
            title: "Argumentative essay".to_string(),
            description: None,
            max_score: 100.0,
            criteria,
        }
    }

    #[test]
    fn test_valid_rubric() {
        let req = request(vec![criterion("Thesis", 40.0), criterion("Evidence", 60.0)]);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_weights_must_sum_to_100() {
        let req = request(vec![criterion("Thesis", 40.0), criterion("Evidence", 50.0)]);
        let err = req.validate().unwrap_err();
        assert!(err.contains("sum to 100"));
    }

    #[test]
    fn test_rejects_level_outside_range() {
        let mut c = criterion("Thesis", 100.0);
        c.levels.push(ScoreLevel {
            level: 5,
            description: String::new(),
            points: 0.0,
        });
        assert!(request(vec![c]).validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut a = criterion("Thesis", 50.0);
        let mut b = criterion("Evidence", 50.0);
        a.id = Some("c1".to_string());
        b.id = Some("c1".to_string());
        assert!(request(vec![a, b]).validate().is_err());
    }

    #[test]
    fn test_rejects_reserved_total_id() {
        let mut a = criterion("Thesis", 50.0);
        a.id = Some("total".to_string());
        let err = request(vec![a, criterion("Evidence", 50.0)])
            .validate()
            .unwrap_err();
        assert!(err.contains("reserved"));
    }

    #[test]
    fn test_into_criteria_generates_ids() {
        let req = request(vec![criterion("Thesis", 100.0)]);
        let criteria = req.into_criteria();
        assert_eq!(criteria.len(), 1);
        assert!(!criteria[0].id.is_empty());
    }
}
