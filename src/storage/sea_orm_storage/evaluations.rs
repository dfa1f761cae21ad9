use super::SeaOrmStorage;
use crate::entity::evaluations::{ActiveModel, Column, Entity as Evaluations};
use crate::errors::{HotsError, Result};
use crate::models::evaluations::{entities::Evaluation, requests::EvaluationUpsert};
use crate::utils::safe_json_stringify;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 保存评价，同一提交已有评价时覆盖
    pub async fn upsert_evaluation_impl(&self, req: EvaluationUpsert) -> Result<Evaluation> {
        let now = chrono::Utc::now().timestamp();
        let scores = safe_json_stringify(&req.scores, "{}");
        let feedback = safe_json_stringify(&req.feedback, "{}");

        let existing = Evaluations::find()
            .filter(Column::SubmissionId.eq(req.submission_id.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query evaluation: {e}"))
            })?;

        let model = match existing {
            Some(existing) => {
                let mut model: ActiveModel = existing.into();
                model.evaluator_id = Set(req.evaluator_id);
                model.scores = Set(scores);
                model.feedback = Set(feedback);
                model.general_feedback = Set(req.general_feedback);
                model.evaluated_at = Set(now);
                model.updated_at = Set(now);

                model.update(&self.db).await.map_err(|e| {
                    HotsError::database_operation(format!("Failed to update evaluation: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    id: Set(uuid::Uuid::new_v4().to_string()),
                    submission_id: Set(req.submission_id),
                    evaluator_id: Set(req.evaluator_id),
                    scores: Set(scores),
                    feedback: Set(feedback),
                    general_feedback: Set(req.general_feedback),
                    evaluated_at: Set(now),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                model.insert(&self.db).await.map_err(|e| {
                    HotsError::database_operation(format!("Failed to create evaluation: {e}"))
                })?
            }
        };

        Ok(model.into_evaluation())
    }

    pub async fn get_evaluation_by_submission_id_impl(
        &self,
        submission_id: &str,
    ) -> Result<Option<Evaluation>> {
        let result = Evaluations::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query evaluation: {e}"))
            })?;

        Ok(result.map(|m| m.into_evaluation()))
    }
}
