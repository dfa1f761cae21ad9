use super::SeaOrmStorage;
use crate::entity::rubrics::{ActiveModel, Column, Entity as Rubrics};
use crate::errors::{HotsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    rubrics::{
        entities::Rubric,
        requests::{CreateRubricRequest, RubricListParams},
    },
};
use crate::utils::{escape_like_pattern, safe_json_stringify};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建量规，调用方需先完成校验
    pub async fn create_rubric_impl(
        &self,
        created_by: &str,
        req: CreateRubricRequest,
    ) -> Result<Rubric> {
        let now = chrono::Utc::now().timestamp();
        let title = req.title.trim().to_string();
        let description = req.description.clone();
        let max_score = req.max_score;
        let criteria = req.into_criteria();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(title),
            description: Set(description),
            criteria: Set(safe_json_stringify(&criteria, "[]")),
            max_score: Set(max_score),
            created_by: Set(created_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to create rubric: {e}")))?;

        Ok(result.into_rubric())
    }

    pub async fn get_rubric_by_id_impl(&self, id: &str) -> Result<Option<Rubric>> {
        let result = Rubrics::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to query rubric: {e}")))?;

        Ok(result.map(|m| m.into_rubric()))
    }

    pub async fn list_rubrics_with_pagination_impl(
        &self,
        params: RubricListParams,
    ) -> Result<PaginatedResponse<Rubric>> {
        let (page, size) = params.pagination.normalized();

        let mut select = Rubrics::find();
        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            select = select.filter(Column::Title.contains(escape_like_pattern(search.trim())));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to count rubrics: {e}")))?;
        let rubrics = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to list rubrics: {e}")))?;

        Ok(PaginatedResponse {
            items: rubrics.into_iter().map(|m| m.into_rubric()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}
