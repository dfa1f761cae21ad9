use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{HotsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListParams, CreateAssignmentRequest},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        created_by: &str,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description),
            activity_id: Set(req.activity_id),
            module_id: Set(req.module_id),
            rubric_id: Set(req.rubric_id),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            is_published: Set(req.is_published),
            is_challenge: Set(req.is_challenge),
            created_by: Set(created_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            HotsError::database_operation(format!("Failed to create assignment: {e}"))
        })?;

        Ok(result.into_assignment())
    }

    pub async fn get_assignment_by_id_impl(&self, id: &str) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query assignment: {e}"))
            })?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 分页列出作业，最新创建的在前
    pub async fn list_assignments_with_pagination_impl(
        &self,
        params: AssignmentListParams,
    ) -> Result<PaginatedResponse<Assignment>> {
        let (page, size) = params.pagination().normalized();

        let mut select = Assignments::find();

        if let Some(published) = params.published {
            select = select.filter(Column::IsPublished.eq(published));
        }

        if let Some(challenge) = params.challenge {
            select = select.filter(Column::IsChallenge.eq(challenge));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            HotsError::database_operation(format!("Failed to count assignments: {e}"))
        })?;
        let assignments = paginator.fetch_page(page - 1).await.map_err(|e| {
            HotsError::database_operation(format!("Failed to list assignments: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}
