#![allow(dead_code)]

use std::sync::Arc;

use hots_english::models::activities::entities::{ActivityType, HotsLevel};
use hots_english::models::activities::requests::CreateActivityRequest;
use hots_english::models::assignments::entities::Assignment;
use hots_english::models::assignments::requests::CreateAssignmentRequest;
use hots_english::models::rubrics::entities::Rubric;
use hots_english::models::rubrics::requests::{CreateRubricRequest, CriterionInput};
use hots_english::models::users::entities::{User, UserRole};
use hots_english::models::users::requests::CreateUserRequest;
use hots_english::storage::Storage;
use hots_english::storage::sea_orm_storage::SeaOrmStorage;
use hots_english::utils::password::hash_password;
use sea_orm::{ConnectOptions, Database};

pub const PASSWORD: &str = "Secret123";

/// 内存 SQLite，单连接保证所有查询落在同一个库上
pub async fn memory_storage() -> Arc<dyn Storage> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options).await.unwrap();
    Arc::new(SeaOrmStorage::with_connection(db).await.unwrap())
}

pub async fn seed_user(storage: &dyn Storage, email: &str, role: UserRole) -> User {
    storage
        .create_user(CreateUserRequest {
            name: email.split('@').next().unwrap_or("user").to_string(),
            email: email.to_string(),
            password: hash_password(PASSWORD).unwrap(),
            role,
            email_verified: true,
            is_active: true,
        })
        .await
        .unwrap()
}

pub async fn seed_rubric(storage: &dyn Storage, teacher: &User) -> Rubric {
    let criterion = |id: &str, name: &str, weight: f64| CriterionInput {
        id: Some(id.to_string()),
        name: name.to_string(),
        description: String::new(),
        weight,
        levels: vec![],
    };
    storage
        .create_rubric(
            &teacher.id,
            CreateRubricRequest {
                title: "Opinion paragraph".to_string(),
                description: None,
                max_score: 100.0,
                criteria: vec![
                    criterion("argument", "Argument", 40.0),
                    criterion("language", "Language", 60.0),
                ],
            },
        )
        .await
        .unwrap()
}

pub async fn seed_assignment(
    storage: &dyn Storage,
    teacher: &User,
    rubric_id: Option<String>,
    is_published: bool,
) -> Assignment {
    let activity = storage
        .create_activity(
            &teacher.id,
            CreateActivityRequest {
                title: "Compare two headlines".to_string(),
                description: None,
                instructions: Some("Explain which headline is more persuasive".to_string()),
                activity_type: ActivityType::Reading,
                hots_level: HotsLevel::Analyze,
                content: None,
            },
        )
        .await
        .unwrap();

    storage
        .create_assignment(
            &teacher.id,
            CreateAssignmentRequest {
                title: "Headline analysis".to_string(),
                description: None,
                activity_id: Some(activity.id),
                module_id: None,
                rubric_id,
                due_date: None,
                is_published,
                is_challenge: false,
            },
        )
        .await
        .unwrap()
}
