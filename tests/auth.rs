mod common;

use hots_english::models::auth::RegisterRequest;
use hots_english::models::users::entities::UserRole;
use hots_english::services::auth::register::{RegisterError, register_user};

fn request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        name: "Siti Rahma".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        confirm_password: password.to_string(),
    }
}

#[tokio::test]
async fn test_register_creates_student() {
    let storage = common::memory_storage().await;

    let user = register_user(storage.as_ref(), request("siti@school.id", "Secret123"))
        .await
        .unwrap();
    assert_eq!(user.role, UserRole::Student);
    assert!(user.is_active);
    assert!(!user.email_verified);
    assert_ne!(user.password_hash, "Secret123");
    assert_eq!(storage.count_users().await.unwrap(), 1);
}

#[tokio::test]
async fn test_weak_password_never_reaches_database() {
    let storage = common::memory_storage().await;

    let err = register_user(storage.as_ref(), request("siti@school.id", "lowercase1"))
        .await
        .unwrap_err();
    match err {
        RegisterError::Validation(fields) => assert!(fields.contains_key("password")),
        _ => panic!("expected validation error"),
    }
    assert_eq!(storage.count_users().await.unwrap(), 0);
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let storage = common::memory_storage().await;
    common::seed_user(storage.as_ref(), "siti@school.id", UserRole::Student).await;

    let err = register_user(storage.as_ref(), request("siti@school.id", "Secret123"))
        .await
        .unwrap_err();
    assert!(matches!(err, RegisterError::EmailTaken));
    assert_eq!(storage.count_users().await.unwrap(), 1);

    // 邮箱查重区分大小写
    assert!(
        register_user(storage.as_ref(), request("Siti@school.id", "Secret123"))
            .await
            .is_ok()
    );
}
