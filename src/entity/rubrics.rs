//! 评分量规实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "rubrics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// JSON 数组：评分标准列表
    #[sea_orm(column_type = "Text")]
    pub criteria: String,
    #[sea_orm(column_type = "Double")]
    pub max_score: f64,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_rubric(self) -> crate::models::rubrics::entities::Rubric {
        use crate::models::rubrics::entities::{Criterion, Rubric};
        use crate::utils::json::safe_json_parse;

        let raw = serde_json::Value::String(self.criteria);
        let criteria = serde_json::from_value::<Vec<Criterion>>(safe_json_parse(
            &raw,
            serde_json::Value::Array(vec![]),
        ))
        .unwrap_or_else(|e| {
            tracing::warn!("Rubric {} has unreadable criteria: {}", self.id, e);
            Vec::new()
        });

        Rubric {
            id: self.id,
            title: self.title,
            description: self.description,
            criteria,
            max_score: self.max_score,
            created_by: self.created_by,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
