mod common;

use chrono::Utc;
use hots_english::errors::HotsError;
use hots_english::models::submissions::requests::SubmitAssignmentRequest;
use hots_english::models::users::entities::UserRole;
use hots_english::models::PaginationQuery;
use hots_english::services::assignments::detail::find_visible_assignment;
use hots_english::services::submissions::submit::submit_assignment;
use serde_json::json;

fn request(submission_id: Option<String>, text: &str, is_draft: bool) -> SubmitAssignmentRequest {
    SubmitAssignmentRequest {
        submission_id,
        text_response: Some(text.to_string()),
        audio_url: None,
        video_url: None,
        document_urls: vec![],
        checklist: vec![json!({"text": "Used evidence", "checked": true}), json!({"id": 7})],
        is_draft,
        version: 1,
    }
}

#[tokio::test]
async fn test_draft_then_final_updates_same_row() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, true).await;

    let draft = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(None, "first thoughts", true),
    )
    .await
    .unwrap();
    assert!(draft.is_draft);
    assert!(draft.submitted_at.is_none());
    assert!(draft.revised_at.is_none());
    assert_eq!(draft.checklist.len(), 2);
    assert_eq!(draft.checklist[0].id, "item-1");
    assert!(draft.checklist[0].checked);
    assert_eq!(draft.checklist[1].id, "7");
    assert_eq!(draft.checklist[1].text, "");

    let final_submission = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(Some(draft.id.clone()), "final answer", false),
    )
    .await
    .unwrap();
    assert_eq!(final_submission.id, draft.id);
    assert!(!final_submission.is_draft);
    assert!(final_submission.submitted_at.is_some());
    assert!(final_submission.revised_at.is_some());
    assert_eq!(final_submission.text_response.as_deref(), Some("final answer"));

    let listed = storage
        .list_submissions_by_assignment(&assignment.id, PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.pagination.total, 1);
    assert_eq!(listed.items.len(), 1);

    let latest = storage
        .get_latest_submission(&assignment.id, &student.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(latest.id, draft.id);
}

#[tokio::test]
async fn test_insert_sets_timestamps_to_call_time() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, true).await;

    // 时间戳按秒保存
    let before = Utc::now().timestamp();
    let submission = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(None, "final answer", false),
    )
    .await
    .unwrap();
    let after = Utc::now().timestamp();

    let created = submission.created_at.timestamp();
    assert!((before..=after).contains(&created));
    let submitted = submission.submitted_at.unwrap().timestamp();
    assert!((before..=after).contains(&submitted));
    assert!(submission.revised_at.is_none());
}

#[tokio::test]
async fn test_draft_over_submitted_row_clears_submitted_at() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, true).await;

    let submitted = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(None, "final answer", false),
    )
    .await
    .unwrap();
    assert!(submitted.submitted_at.is_some());

    let revision = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(Some(submitted.id.clone()), "reworking after feedback", true),
    )
    .await
    .unwrap();
    assert_eq!(revision.id, submitted.id);
    assert!(revision.is_draft);
    assert!(revision.submitted_at.is_none());
    assert!(revision.revised_at.is_some());

    let stored = storage
        .get_submission_by_id(&submitted.id)
        .await
        .unwrap()
        .unwrap();
    assert!(stored.is_draft);
    assert!(stored.submitted_at.is_none());
}

#[tokio::test]
async fn test_cannot_update_another_students_submission() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let owner = common::seed_user(storage.as_ref(), "owner@school.id", UserRole::Student).await;
    let other = common::seed_user(storage.as_ref(), "other@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, true).await;

    let submission = submit_assignment(
        storage.as_ref(),
        &owner,
        &assignment.id,
        request(None, "mine", false),
    )
    .await
    .unwrap();

    let err = submit_assignment(
        storage.as_ref(),
        &other,
        &assignment.id,
        request(Some(submission.id), "overwrite", false),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HotsError::Authorization(_)));
}

#[tokio::test]
async fn test_unknown_submission_id_is_not_found() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, true).await;

    let err = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(Some("missing".to_string()), "text", true),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HotsError::NotFound(_)));
}

#[tokio::test]
async fn test_unpublished_assignment_hidden_from_students() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let assignment = common::seed_assignment(storage.as_ref(), &teacher, None, false).await;

    let err = find_visible_assignment(storage.as_ref(), &student, &assignment.id)
        .await
        .unwrap_err();
    assert!(matches!(err, HotsError::NotFound(_)));
    assert!(
        find_visible_assignment(storage.as_ref(), &teacher, &assignment.id)
            .await
            .is_ok()
    );

    let err = submit_assignment(
        storage.as_ref(),
        &student,
        &assignment.id,
        request(None, "sneaky", false),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HotsError::NotFound(_)));
}
