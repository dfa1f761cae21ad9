mod common;

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use hots_english::models::users::entities::UserRole;
use hots_english::routes;
use serde_json::{Value, json};

macro_rules! init_app {
    ($storage:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($storage.clone()))
                .configure(routes::configure_auth_routes)
                .configure(routes::configure_rubrics_routes)
                .configure(routes::configure_assignments_routes)
                .configure(routes::configure_submissions_routes),
        )
        .await
    };
}

macro_rules! login {
    ($app:expr, $email:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/login")
            .set_json(json!({"email": $email, "password": common::PASSWORD}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["data"]["access_token"]
            .as_str()
            .expect("login should return a token")
            .to_string()
    }};
}

#[actix_web::test]
async fn test_register_returns_field_errors() {
    let storage = common::memory_storage().await;
    let app = init_app!(storage);

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(json!({
            "name": "A",
            "email": "not-an-email",
            "password": "short",
            "confirmPassword": "different"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    for field in ["name", "email", "password", "confirm_password"] {
        assert!(body["data"][field].is_array(), "missing errors for {field}");
    }
}

#[actix_web::test]
async fn test_protected_routes_require_token_and_role() {
    let storage = common::memory_storage().await;
    common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    common::seed_user(storage.as_ref(), "guru@school.id", UserRole::Teacher).await;
    let app = init_app!(storage);

    let req = test::TestRequest::get().uri("/api/v1/rubrics").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let student_token = login!(app, "siswa@school.id");
    let req = test::TestRequest::get()
        .uri("/api/v1/rubrics")
        .insert_header(("Authorization", format!("Bearer {student_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let teacher_token = login!(app, "guru@school.id");
    let req = test::TestRequest::get()
        .uri("/api/v1/rubrics")
        .insert_header(("Authorization", format!("Bearer {teacher_token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_student_submits_and_reads_latest() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "guru@school.id", UserRole::Teacher).await;
    common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, true).await;
    let app = init_app!(storage);
    let token = login!(app, "siswa@school.id");

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/assignments/{}/submissions/my", assignment.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["data"].is_null());

    let req = test::TestRequest::post()
        .uri(&format!("/api/v1/assignments/{}/submissions", assignment.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .set_json(json!({
            "text_response": "Headline B frames the event as a crisis.",
            "checklist": [{"text": "Cited both headlines", "checked": true}],
            "is_draft": false
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["success"], json!(true));
    let submission_id = body["data"]["submission"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/assignments/{}/submissions/my", assignment.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["id"], json!(submission_id));
    assert!(body["data"]["submitted_at"].is_string());

    // 学生不能查看全部提交
    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/assignments/{}/submissions", assignment.id))
        .insert_header(("Authorization", format!("Bearer {token}")))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
