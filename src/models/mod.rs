pub mod activities;
pub mod assignments;
pub mod auth;
pub mod common;
pub mod evaluations;
pub mod modules;
pub mod rubrics;
pub mod submissions;
pub mod users;

pub use common::{ApiResponse, FieldErrors, PaginatedResponse, PaginationInfo, PaginationQuery};

use serde::{Deserialize, Serialize};

/// 程序启动时间
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 业务错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    ValidationFailed = 1005,
    InternalServerError = 1006,

    // 认证与注册
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserEmailAlreadyExists = 2002,
    UserInactive = 2003,

    // 内容（活动 / 模块 / 量规）
    ActivityNotFound = 3000,
    ModuleNotFound = 3001,
    RubricNotFound = 3002,
    RubricInvalid = 3003,

    // 作业与提交
    AssignmentNotFound = 4000,
    AssignmentInvalid = 4002,
    SubmissionNotFound = 4003,
    SubmissionFailed = 4004,

    // 评价
    EvaluationNotFound = 5000,
    EvaluationInvalid = 5001,
    EvaluationFailed = 5002,
}
