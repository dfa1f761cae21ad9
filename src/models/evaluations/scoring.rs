//! 评价展示逻辑：总分、百分比、状态与各评分标准得分。
//!
//! 纯函数，无持久化副作用。状态规则需与前端展示保持一致：
//! 总分 >= 70 为 "Lulus"，否则 "Perlu Perbaikan"；总评中含 "revisi"
//! （不区分大小写）时一律为 "Perlu Revisi"。

use super::entities::{Evaluation, EvaluationStatus};
use super::responses::{CriterionBreakdown, EvaluationView};
use crate::models::rubrics::entities::{Rubric, SCORE_LEVELS};

pub const PASSING_SCORE: f64 = 70.0;
pub const DEFAULT_MAX_SCORE: f64 = 100.0;
const REVISION_KEYWORD: &str = "revisi";

/// 量规满分，0 或缺失时退回 100
pub fn effective_max_score(max_score: Option<f64>) -> f64 {
    match max_score {
        Some(max) if max.is_finite() && max != 0.0 => max,
        _ => DEFAULT_MAX_SCORE,
    }
}

pub fn score_percentage(total_score: f64, max_score: Option<f64>) -> f64 {
    total_score / effective_max_score(max_score) * 100.0
}

pub fn derive_status(total_score: f64, general_feedback: Option<&str>) -> EvaluationStatus {
    let requests_revision = general_feedback
        .map(|text| text.to_lowercase().contains(REVISION_KEYWORD))
        .unwrap_or(false);

    if requests_revision {
        EvaluationStatus::NeedsRevision
    } else if total_score >= PASSING_SCORE {
        EvaluationStatus::Passed
    } else {
        EvaluationStatus::NeedsImprovement
    }
}

/// 单项得分：权重占满分的份额，再按 1–4 等级折算
pub fn criterion_contribution(weight: f64, score: f64, max_score: f64) -> f64 {
    (weight / 100.0) * score * max_score / SCORE_LEVELS as f64
}

/// 按量规汇总各项得分，保留两位小数
pub fn compute_total<'a, I>(rubric: &Rubric, scores: I) -> f64
where
    I: IntoIterator<Item = (&'a str, f64)>,
{
    let max_score = effective_max_score(Some(rubric.max_score));
    let total: f64 = scores
        .into_iter()
        .filter_map(|(id, score)| {
            rubric
                .criterion(id)
                .map(|c| criterion_contribution(c.weight, score, max_score))
        })
        .sum();
    (total * 100.0).round() / 100.0
}

pub fn build_evaluation_view(evaluation: &Evaluation, rubric: Option<&Rubric>) -> EvaluationView {
    let total_score = evaluation.total_score();
    let max_score = effective_max_score(rubric.map(|r| r.max_score));

    let criteria = rubric
        .map(|r| {
            r.criteria
                .iter()
                .map(|criterion| {
                    let score = evaluation
                        .scores
                        .get(&criterion.id)
                        .copied()
                        .filter(|v| v.is_finite());
                    CriterionBreakdown {
                        criterion_id: criterion.id.clone(),
                        name: criterion.name.clone(),
                        weight: criterion.weight,
                        score,
                        points: criterion_contribution(
                            criterion.weight,
                            score.unwrap_or(0.0),
                            max_score,
                        ),
                        feedback: evaluation.feedback.get(&criterion.id).cloned(),
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    EvaluationView {
        evaluation_id: evaluation.id.clone(),
        submission_id: evaluation.submission_id.clone(),
        total_score,
        max_score,
        score_percentage: score_percentage(total_score, rubric.map(|r| r.max_score)),
        status: derive_status(total_score, evaluation.general_feedback.as_deref()),
        general_feedback: evaluation.general_feedback.clone(),
        criteria,
        evaluated_at: evaluation.evaluated_at,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::evaluations::entities::TOTAL_SCORE_KEY;
    use crate::models::rubrics::entities::Criterion;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn rubric() -> Rubric {
        let now = chrono::Utc::now();
        Rubric {
            id: "r1".to_string(),
            title: "Opinion paragraph".to_string(),
            description: None,
            criteria: vec![
                Criterion {
                    id: "c1".to_string(),
                    name: "Argument".to_string(),
                    description: String::new(),
                    weight: 40.0,
                    levels: vec![],
                },
                Criterion {
                    id: "c2".to_string(),
                    name: "Language".to_string(),
                    description: String::new(),
                    weight: 60.0,
                    levels: vec![],
                },
            ],
            max_score: 100.0,
            created_by: "t1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn evaluation(total: Option<f64>, general_feedback: Option<&str>) -> Evaluation {
        let now = chrono::Utc::now();
        let mut scores = BTreeMap::new();
        scores.insert("c1".to_string(), 3.0);
        if let Some(total) = total {
            scores.insert(TOTAL_SCORE_KEY.to_string(), total);
        }
        let mut feedback = BTreeMap::new();
        feedback.insert("c1".to_string(), "Clear claim".to_string());
        Evaluation {
            id: "e1".to_string(),
            submission_id: "s1".to_string(),
            evaluator_id: "t1".to_string(),
            scores,
            feedback,
            general_feedback: general_feedback.map(str::to_string),
            evaluated_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_passing_score() {
        assert_eq!(derive_status(75.0, Some("")), EvaluationStatus::Passed);
        assert_eq!(derive_status(70.0, None), EvaluationStatus::Passed);
    }

    #[test]
    fn test_failing_score() {
        assert_eq!(
            derive_status(60.0, Some("")),
            EvaluationStatus::NeedsImprovement
        );
    }

    #[test]
    fn test_revision_keyword_overrides_passing_score() {
        assert_eq!(
            derive_status(90.0, Some("Tolong revisi bagian ini")),
            EvaluationStatus::NeedsRevision
        );
        assert_eq!(
            derive_status(40.0, Some("REVISI paragraf kedua")),
            EvaluationStatus::NeedsRevision
        );
    }

    #[test]
    fn test_criterion_contribution() {
        assert!(approx(criterion_contribution(40.0, 3.0, 100.0), 30.0));
        assert!(approx(criterion_contribution(60.0, 4.0, 100.0), 60.0));
    }

    #[test]
    fn test_percentage_falls_back_to_100() {
        assert!(approx(score_percentage(45.0, Some(0.0)), 45.0));
        assert!(approx(score_percentage(45.0, None), 45.0));
        assert!(approx(score_percentage(45.0, Some(50.0)), 90.0));
    }

    #[test]
    fn test_compute_total_ignores_unknown_criteria() {
        let rubric = rubric();
        let total = compute_total(&rubric, [("c1", 3.0), ("c2", 4.0), ("zz", 4.0)]);
        assert!(approx(total, 90.0));
    }

    #[test]
    fn test_view_defaults_missing_total_to_zero() {
        let rubric = rubric();
        let view = build_evaluation_view(&evaluation(None, None), Some(&rubric));
        assert!(approx(view.total_score, 0.0));
        assert_eq!(view.status, EvaluationStatus::NeedsImprovement);
    }

    #[test]
    fn test_view_breakdown() {
        let rubric = rubric();
        let view = build_evaluation_view(&evaluation(Some(75.0), Some("")), Some(&rubric));
        assert_eq!(view.status, EvaluationStatus::Passed);
        assert!(approx(view.score_percentage, 75.0));
        assert_eq!(view.criteria.len(), 2);
        assert!(approx(view.criteria[0].points, 30.0));
        assert_eq!(view.criteria[0].feedback.as_deref(), Some("Clear claim"));
        assert_eq!(view.criteria[1].score, None);
        assert!(approx(view.criteria[1].points, 0.0));
    }

    #[test]
    fn test_view_without_rubric() {
        let view = build_evaluation_view(&evaluation(Some(80.0), None), None);
        assert!(view.criteria.is_empty());
        assert!(approx(view.max_score, 100.0));
    }
}
