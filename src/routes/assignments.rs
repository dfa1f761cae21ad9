use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::PaginationQuery;
use crate::models::assignments::requests::{AssignmentListParams, CreateAssignmentRequest};
use crate::models::submissions::requests::SubmitAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::services::{AssignmentService, SubmissionService};

// 懒加载的全局服务实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn list_assignments(
    req: HttpRequest,
    query: web::Query<AssignmentListParams>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .list_assignments(&req, query.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, body.into_inner())
        .await
}

pub async fn get_assignment(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .get_assignment(&req, &path.into_inner())
        .await
}

// 学生提交作业（草稿或正式提交）
pub async fn submit_assignment(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<SubmitAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit_assignment(&req, &path.into_inner(), body.into_inner())
        .await
}

// 获取我的最新提交
pub async fn get_my_latest_submission(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .get_my_latest_submission(&req, &path.into_inner())
        .await
}

// 教师查看作业的全部提交
pub async fn list_assignment_submissions(
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_assignment_submissions(&req, &path.into_inner(), query.into_inner())
        .await
}

// 配置路由
pub fn configure_assignments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/assignments")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_assignments))
                    .route(
                        web::post()
                            .to(create_assignment)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .route("/{id}", web::get().to(get_assignment))
            .route(
                "/{id}/submissions/my",
                web::get().to(get_my_latest_submission),
            )
            .service(
                web::resource("/{id}/submissions")
                    .route(web::post().to(submit_assignment))
                    .route(
                        web::get()
                            .to(list_assignment_submissions)
                            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
