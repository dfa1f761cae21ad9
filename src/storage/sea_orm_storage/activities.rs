use super::SeaOrmStorage;
use crate::entity::activities::{ActiveModel, Column, Entity as Activities};
use crate::errors::{HotsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo,
    activities::{
        entities::Activity,
        requests::{ActivityListParams, CreateActivityRequest},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建学习活动
    pub async fn create_activity_impl(
        &self,
        created_by: &str,
        req: CreateActivityRequest,
    ) -> Result<Activity> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description),
            instructions: Set(req.instructions),
            activity_type: Set(req.activity_type.to_string()),
            hots_level: Set(req.hots_level.to_string()),
            content: Set(req.content),
            created_by: Set(created_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            HotsError::database_operation(format!("Failed to create activity: {e}"))
        })?;

        Ok(result.into_activity())
    }

    pub async fn get_activity_by_id_impl(&self, id: &str) -> Result<Option<Activity>> {
        let result = Activities::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query activity: {e}"))
            })?;

        Ok(result.map(|m| m.into_activity()))
    }

    /// 分页列出活动，支持标题搜索与类型筛选
    pub async fn list_activities_with_pagination_impl(
        &self,
        params: ActivityListParams,
    ) -> Result<PaginatedResponse<Activity>> {
        let (page, size) = params.pagination.normalized();

        let mut select = Activities::find();

        if let Some(ref search) = params.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        if let Some(ref activity_type) = params.activity_type {
            select = select.filter(Column::ActivityType.eq(activity_type.to_string()));
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            HotsError::database_operation(format!("Failed to count activities: {e}"))
        })?;
        let activities = paginator.fetch_page(page - 1).await.map_err(|e| {
            HotsError::database_operation(format!("Failed to list activities: {e}"))
        })?;

        Ok(PaginatedResponse {
            items: activities.into_iter().map(|m| m.into_activity()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}
