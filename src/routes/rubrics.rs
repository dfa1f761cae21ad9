use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::rubrics::requests::{CreateRubricRequest, RubricListParams};
use crate::models::users::entities::UserRole;
use crate::services::RubricService;

// 懒加载的全局 RubricService 实例
static RUBRIC_SERVICE: Lazy<RubricService> = Lazy::new(RubricService::new_lazy);

pub async fn list_rubrics(
    req: HttpRequest,
    query: web::Query<RubricListParams>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.list_rubrics(&req, query.into_inner()).await
}

pub async fn create_rubric(
    req: HttpRequest,
    body: web::Json<CreateRubricRequest>,
) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.create_rubric(&req, body.into_inner()).await
}

pub async fn get_rubric(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    RUBRIC_SERVICE.get_rubric(&req, &path.into_inner()).await
}

// 配置路由，量规仅对教师和管理员开放
pub fn configure_rubrics_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/rubrics")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_rubrics))
            .route("", web::post().to(create_rubric))
            .route("/{id}", web::get().to(get_rubric)),
    );
}
