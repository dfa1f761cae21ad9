use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::activities::requests::{ActivityListParams, CreateActivityRequest};
use crate::models::users::entities::UserRole;
use crate::services::ActivityService;

// 懒加载的全局 ActivityService 实例
static ACTIVITY_SERVICE: Lazy<ActivityService> = Lazy::new(ActivityService::new_lazy);

pub async fn list_activities(
    req: HttpRequest,
    query: web::Query<ActivityListParams>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .list_activities(&req, query.into_inner())
        .await
}

pub async fn create_activity(
    req: HttpRequest,
    body: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .create_activity(&req, body.into_inner())
        .await
}

pub async fn get_activity(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.get_activity(&req, &path.into_inner()).await
}

// 配置路由
pub fn configure_activities_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activities")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_activities))
                    .route(
                        web::post()
                            .to(create_activity)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .route("/{id}", web::get().to(get_activity)),
    );
}
