use super::SeaOrmStorage;
use crate::entity::activities::{Column as ActivityColumn, Entity as Activities};
use crate::entity::module_activities::{
    ActiveModel as LinkActiveModel, Column as LinkColumn, Entity as ModuleActivities,
};
use crate::entity::modules::{ActiveModel, Column, Entity as Modules};
use crate::errors::{HotsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo, PaginationQuery,
    modules::{entities::Module, requests::CreateModuleRequest, responses::ModuleDetail},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建模块，activity_ids 的顺序即模块内顺序
    pub async fn create_module_impl(
        &self,
        created_by: &str,
        req: CreateModuleRequest,
    ) -> Result<Module> {
        let now = chrono::Utc::now().timestamp();
        let module_id = uuid::Uuid::new_v4().to_string();

        let model = ActiveModel {
            id: Set(module_id.clone()),
            title: Set(req.title.trim().to_string()),
            description: Set(req.description),
            created_by: Set(created_by.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let module = model
            .insert(&self.db)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to create module: {e}")))?;

        for (position, activity_id) in req.activity_ids.into_iter().enumerate() {
            let link = LinkActiveModel {
                id: Set(uuid::Uuid::new_v4().to_string()),
                module_id: Set(module_id.clone()),
                activity_id: Set(activity_id),
                position: Set(position as i32),
            };
            link.insert(&self.db).await.map_err(|e| {
                HotsError::database_operation(format!("Failed to link module activity: {e}"))
            })?;
        }

        Ok(module.into_module())
    }

    /// 获取模块详情，活动按 position 排序
    pub async fn get_module_detail_impl(&self, id: &str) -> Result<Option<ModuleDetail>> {
        let Some(module) = Modules::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to query module: {e}")))?
        else {
            return Ok(None);
        };

        let links = ModuleActivities::find()
            .filter(LinkColumn::ModuleId.eq(id))
            .order_by_asc(LinkColumn::Position)
            .all(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query module activities: {e}"))
            })?;

        let activity_ids: Vec<String> = links.iter().map(|l| l.activity_id.clone()).collect();
        let mut found = Activities::find()
            .filter(ActivityColumn::Id.is_in(activity_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query activities: {e}"))
            })?;

        let activities = links
            .iter()
            .filter_map(|link| {
                found
                    .iter()
                    .position(|a| a.id == link.activity_id)
                    .map(|idx| found.swap_remove(idx).into_activity())
            })
            .collect();

        Ok(Some(ModuleDetail {
            module: module.into_module(),
            activities,
        }))
    }

    pub async fn list_modules_with_pagination_impl(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<Module>> {
        let (page, size) = query.normalized();

        let paginator = Modules::find()
            .order_by_desc(Column::CreatedAt)
            .paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to count modules: {e}")))?;
        let modules = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to list modules: {e}")))?;

        Ok(PaginatedResponse {
            items: modules.into_iter().map(|m| m.into_module()).collect(),
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}
