//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub text_response: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    /// JSON 数组：文档链接
    #[sea_orm(column_type = "Text")]
    pub document_urls: String,
    /// JSON 数组：清单项
    #[sea_orm(column_type = "Text")]
    pub checklist: String,
    pub is_draft: bool,
    pub version: i32,
    pub submitted_at: Option<i64>,
    pub revised_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::StudentId",
        to = "super::users::Column::Id"
    )]
    Student,
    #[sea_orm(has_many = "super::evaluations::Entity")]
    Evaluations,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::evaluations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Evaluations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::requests::parse_checklist;
        use crate::utils::json::parse_document_urls;

        crate::models::submissions::entities::Submission {
            document_urls: parse_document_urls(Some(&self.document_urls)),
            checklist: parse_checklist(Some(&self.checklist)),
            id: self.id,
            assignment_id: self.assignment_id,
            student_id: self.student_id,
            text_response: self.text_response,
            audio_url: self.audio_url,
            video_url: self.video_url,
            is_draft: self.is_draft,
            version: self.version,
            submitted_at: self.submitted_at.map(super::to_datetime),
            revised_at: self.revised_at.map(super::to_datetime),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
