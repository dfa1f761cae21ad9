use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::modules::requests::CreateModuleRequest;
use crate::models::users::entities::UserRole;
use crate::services::ModuleService;

// 懒加载的全局 ModuleService 实例
static MODULE_SERVICE: Lazy<ModuleService> = Lazy::new(ModuleService::new_lazy);

pub async fn list_modules(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.list_modules(&req, query.into_inner()).await
}

pub async fn create_module(
    req: HttpRequest,
    body: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.create_module(&req, body.into_inner()).await
}

// 模块详情，活动按顺序展开
pub async fn get_module(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.get_module(&req, &path.into_inner()).await
}

// 配置路由
pub fn configure_modules_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/modules")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_modules))
                    .route(
                        web::post()
                            .to(create_module)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .route("/{id}", web::get().to(get_module)),
    );
}
