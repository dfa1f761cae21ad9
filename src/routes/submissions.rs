use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::evaluations::requests::EvaluateSubmissionRequest;
use crate::models::users::entities::UserRole;
use crate::services::{EvaluationService, SubmissionService};

// 懒加载的全局服务实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);
static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

// 获取提交详情，仅提交者本人或教师可见
pub async fn get_submission(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_submission(&req, &path.into_inner())
        .await
}

pub async fn get_evaluation(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .get_submission_evaluation(&req, &path.into_inner())
        .await
}

// 评价提交，重复评价会覆盖之前的结果
pub async fn evaluate_submission(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<EvaluateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .evaluate_submission(&req, &path.into_inner(), body.into_inner())
        .await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .route("/{id}", web::get().to(get_submission))
            .service(
                web::resource("/{id}/evaluation")
                    .route(web::get().to(get_evaluation))
                    .route(
                        web::put()
                            .to(evaluate_submission)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
