use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info};

use crate::errors::HotsError;
use crate::models::{
    ApiResponse, ErrorCode, FieldErrors,
    auth::{RegisterRequest, RegisterResponse},
    users::{
        entities::{User, UserRole},
        requests::CreateUserRequest,
    },
};
use crate::storage::Storage;
use crate::utils::password::hash_password;
use crate::utils::validate::{
    FieldErrorsBuilder, validate_email, validate_name, validate_password,
};

use super::AuthService;

/// 注册失败原因
#[derive(Debug)]
pub enum RegisterError {
    /// 字段校验失败，未访问数据库
    Validation(FieldErrors),
    /// 邮箱已被注册
    EmailTaken,
    Internal(HotsError),
}

/// 校验注册表单，收集全部字段错误
pub fn validate_register_request(req: &RegisterRequest) -> Result<(), FieldErrors> {
    let mut errors = FieldErrorsBuilder::new();
    errors.check("name", validate_name(&req.name));
    errors.check("email", validate_email(&req.email));
    errors.check("password", validate_password(&req.password));
    if req.confirm_password != req.password {
        errors.add("confirm_password", "Passwords do not match");
    }
    errors.finish()
}

/// 注册新学生账号
///
/// 校验失败时不访问数据库；邮箱按原样（区分大小写）查重。
pub async fn register_user(storage: &dyn Storage, req: RegisterRequest) -> Result<User, RegisterError> {
    validate_register_request(&req).map_err(RegisterError::Validation)?;

    match storage.get_user_by_email(&req.email).await {
        Ok(Some(_)) => return Err(RegisterError::EmailTaken),
        Ok(None) => {}
        Err(e) => return Err(RegisterError::Internal(e)),
    }

    let password_hash = hash_password(&req.password).map_err(RegisterError::Internal)?;

    storage
        .create_user(CreateUserRequest {
            name: req.name.trim().to_string(),
            email: req.email,
            password: password_hash,
            role: UserRole::Student,
            email_verified: false,
            is_active: true,
        })
        .await
        .map_err(RegisterError::Internal)
}

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match register_user(storage.as_ref(), register_request).await {
        Ok(user) => {
            info!("User {} registered", user.id);
            Ok(HttpResponse::Created().json(ApiResponse::success(
                RegisterResponse {
                    success: true,
                    user,
                },
                "Registration successful",
            )))
        }
        Err(RegisterError::Validation(fields)) => Ok(HttpResponse::BadRequest().json(
            ApiResponse::error(ErrorCode::ValidationFailed, fields, "Validation failed"),
        )),
        Err(RegisterError::EmailTaken) => {
            let mut fields = FieldErrors::new();
            fields.insert(
                "email".to_string(),
                vec!["Email is already registered".to_string()],
            );
            Ok(HttpResponse::Conflict().json(ApiResponse::error(
                ErrorCode::UserEmailAlreadyExists,
                fields,
                "Email is already registered",
            )))
        }
        Err(RegisterError::Internal(e)) => {
            error!("Registration failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::RegisterFailed,
                    "Registration failed, please try again later",
                )),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(password: &str, confirm: &str) -> RegisterRequest {
        RegisterRequest {
            name: "Siti Rahma".to_string(),
            email: "siti@example.com".to_string(),
            password: password.to_string(),
            confirm_password: confirm.to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(validate_register_request(&request("Secret123", "Secret123")).is_ok());
    }

    #[test]
    fn test_weak_password_reports_password_field() {
        let errors = validate_register_request(&request("secret", "secret")).unwrap_err();
        assert!(errors.contains_key("password"));
        assert!(!errors.contains_key("confirm_password"));
    }

    #[test]
    fn test_mismatched_confirmation() {
        let errors = validate_register_request(&request("Secret123", "Secret124")).unwrap_err();
        assert_eq!(errors.keys().collect::<Vec<_>>(), vec!["confirm_password"]);
    }

    #[test]
    fn test_collects_all_fields() {
        let req = RegisterRequest {
            name: "S".to_string(),
            email: "nope".to_string(),
            password: "x".to_string(),
            confirm_password: "y".to_string(),
        };
        let errors = validate_register_request(&req).unwrap_err();
        assert_eq!(errors.len(), 4);
    }
}
