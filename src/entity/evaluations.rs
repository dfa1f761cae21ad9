//! 评价实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "evaluations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub submission_id: String,
    pub evaluator_id: String,
    /// JSON 对象：评分标准 id -> 等级，另含 total
    #[sea_orm(column_type = "Text")]
    pub scores: String,
    /// JSON 对象：评分标准 id -> 评语
    #[sea_orm(column_type = "Text")]
    pub feedback: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub general_feedback: Option<String>,
    pub evaluated_at: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::submissions::Entity",
        from = "Column::SubmissionId",
        to = "super::submissions::Column::Id"
    )]
    Submission,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::EvaluatorId",
        to = "super::users::Column::Id"
    )]
    Evaluator,
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_evaluation(self) -> crate::models::evaluations::entities::Evaluation {
        use crate::utils::json::{parse_feedback_map, parse_score_map};

        crate::models::evaluations::entities::Evaluation {
            scores: parse_score_map(Some(&self.scores)),
            feedback: parse_feedback_map(Some(&self.feedback)),
            id: self.id,
            submission_id: self.submission_id,
            evaluator_id: self.evaluator_id,
            general_feedback: self.general_feedback,
            evaluated_at: super::to_datetime(self.evaluated_at),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
