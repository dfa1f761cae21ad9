pub mod activities;
pub mod assignments;
pub mod auth;
pub mod evaluations;
pub mod modules;
pub mod rubrics;
pub mod submissions;

pub use activities::ActivityService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use evaluations::EvaluationService;
pub use modules::ModuleService;
pub use rubrics::RubricService;
pub use submissions::SubmissionService;

use actix_web::{HttpRequest, HttpResponse};
use std::sync::Arc;
use tracing::error;

use crate::errors::HotsError;
use crate::middlewares::RequireJWT;
use crate::models::users::entities::User;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

// 从 app_data 中读取存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> Arc<dyn Storage> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone()
}

/// 取得当前登录用户，缺失时返回 401 响应
pub(crate) fn current_user(request: &HttpRequest) -> Result<User, HttpResponse> {
    RequireJWT::extract_user_claims(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}

/// 将业务错误转换为 HTTP 响应
///
/// 4xx 使用调用方给出的业务错误码；数据库等内部错误记录日志后返回通用信息。
pub(crate) fn error_response(err: &HotsError, code: ErrorCode) -> HttpResponse {
    match err {
        HotsError::Validation(msg) => {
            HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg.as_str()))
        }
        HotsError::NotFound(msg) => {
            HttpResponse::NotFound().json(ApiResponse::error_empty(code, msg.as_str()))
        }
        HotsError::Conflict(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(code, msg.as_str()))
        }
        HotsError::Authentication(msg) => HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, msg.as_str())),
        HotsError::Authorization(msg) => HttpResponse::Forbidden()
            .json(ApiResponse::error_empty(ErrorCode::Forbidden, msg.as_str())),
        _ => {
            error!("{}", err.format_simple());
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Internal server error, please try again later",
            ))
        }
    }
}

/// 取得当前用户并要求其为教师或管理员
pub(crate) fn current_staff(request: &HttpRequest) -> Result<User, HttpResponse> {
    let user = current_user(request)?;
    if user.role.is_staff() {
        Ok(user)
    } else {
        Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "Only teachers and administrators can perform this action",
        )))
    }
}
