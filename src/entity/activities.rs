//! 学习活动实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activities")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub instructions: Option<String>,
    pub activity_type: String,
    pub hots_level: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub content: Option<String>,
    pub created_by: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::module_activities::Entity")]
    ModuleActivities,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::module_activities::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModuleActivities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_activity(self) -> crate::models::activities::entities::Activity {
        use crate::models::activities::entities::{Activity, ActivityType, HotsLevel};

        Activity {
            id: self.id,
            title: self.title,
            description: self.description,
            instructions: self.instructions,
            activity_type: self
                .activity_type
                .parse::<ActivityType>()
                .unwrap_or(ActivityType::Reading),
            hots_level: self
                .hots_level
                .parse::<HotsLevel>()
                .unwrap_or(HotsLevel::Analyze),
            content: self.content,
            created_by: self.created_by,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
