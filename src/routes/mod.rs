pub mod activities;

pub mod assignments;

pub mod auth;

pub mod modules;

pub mod rubrics;

pub mod submissions;

use actix_web::HttpResponse;

use crate::models::{ApiResponse, ErrorCode};

pub use activities::configure_activities_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use modules::configure_modules_routes;
pub use rubrics::configure_rubrics_routes;
pub use submissions::configure_submissions_routes;

// 未匹配任何路由时的兜底响应
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::error_empty(
        ErrorCode::NotFound,
        "Resource not found",
    ))
}
