mod common;

use std::collections::BTreeMap;

use hots_english::errors::HotsError;
use hots_english::models::evaluations::entities::EvaluationStatus;
use hots_english::models::evaluations::requests::EvaluateSubmissionRequest;
use hots_english::models::rubrics::requests::{CreateRubricRequest, CriterionInput};
use hots_english::models::submissions::requests::SubmitAssignmentRequest;
use hots_english::models::users::entities::UserRole;
use hots_english::models::PaginationQuery;
use hots_english::services::evaluations::evaluate::evaluate_submission;
use hots_english::services::evaluations::get::load_evaluation_view;
use hots_english::services::rubrics::create::save_rubric;
use hots_english::services::submissions::submit::submit_assignment;

fn submission(is_draft: bool) -> SubmitAssignmentRequest {
    SubmitAssignmentRequest {
        submission_id: None,
        text_response: Some("The second headline uses loaded words.".to_string()),
        audio_url: None,
        video_url: None,
        document_urls: vec![],
        checklist: vec![],
        is_draft,
        version: 1,
    }
}

fn scores(argument: f64, language: f64, general: Option<&str>) -> EvaluateSubmissionRequest {
    EvaluateSubmissionRequest {
        scores: BTreeMap::from([
            ("argument".to_string(), argument),
            ("language".to_string(), language),
        ]),
        feedback: BTreeMap::from([("argument".to_string(), "Clear claim".to_string())]),
        general_feedback: general.map(str::to_string),
    }
}

#[tokio::test]
async fn test_repeated_evaluation_keeps_one_row() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let rubric = common::seed_rubric(storage.as_ref(), &teacher).await;
    let assignment =
        common::seed_assignment(storage.as_ref(), &teacher, Some(rubric.id.clone()), true).await;
    let submitted = submit_assignment(storage.as_ref(), &student, &assignment.id, submission(false))
        .await
        .unwrap();

    // 40% * 4/4 * 100 + 60% * 2/4 * 100 = 70
    let first = evaluate_submission(
        storage.as_ref(),
        &teacher,
        &submitted.id,
        scores(4.0, 2.0, None),
    )
    .await
    .unwrap();
    assert!((first.total_score - 70.0).abs() < 1e-9);
    assert_eq!(first.status, EvaluationStatus::Passed);

    // 40% * 1/4 * 100 + 60% * 1/4 * 100 = 25
    let second = evaluate_submission(
        storage.as_ref(),
        &teacher,
        &submitted.id,
        scores(1.0, 1.0, Some("Perlu revisi pada bagian bukti")),
    )
    .await
    .unwrap();
    assert_eq!(second.evaluation_id, first.evaluation_id);
    assert!((second.total_score - 25.0).abs() < 1e-9);
    assert_eq!(second.status, EvaluationStatus::NeedsRevision);

    let stored = storage
        .get_evaluation_by_submission_id(&submitted.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.id, first.evaluation_id);
    assert!((stored.total_score() - 25.0).abs() < 1e-9);

    let view = load_evaluation_view(storage.as_ref(), &student, &submitted.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(view.criteria.len(), 2);
    let points: f64 = view.criteria.iter().map(|c| c.points).sum();
    assert!((points - view.total_score).abs() < 1e-9);

    let listed = storage
        .list_submissions_by_assignment(&assignment.id, PaginationQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.items[0].status, Some(EvaluationStatus::NeedsRevision));
}

#[tokio::test]
async fn test_rejects_draft_and_incomplete_scores() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let student = common::seed_user(storage.as_ref(), "siswa@school.id", UserRole::Student).await;
    let rubric = common::seed_rubric(storage.as_ref(), &teacher).await;
    let assignment =
        common::seed_assignment(storage.as_ref(), &teacher, Some(rubric.id.clone()), true).await;

    let draft = submit_assignment(storage.as_ref(), &student, &assignment.id, submission(true))
        .await
        .unwrap();
    let err = evaluate_submission(storage.as_ref(), &teacher, &draft.id, scores(3.0, 3.0, None))
        .await
        .unwrap_err();
    assert!(matches!(err, HotsError::Validation(_)));

    let submitted = submit_assignment(storage.as_ref(), &student, &assignment.id, submission(false))
        .await
        .unwrap();
    let mut partial = scores(3.0, 3.0, None);
    partial.scores.remove("language");
    let err = evaluate_submission(storage.as_ref(), &teacher, &submitted.id, partial)
        .await
        .unwrap_err();
    assert!(matches!(err, HotsError::Validation(_)));

    let err = evaluate_submission(
        storage.as_ref(),
        &teacher,
        &submitted.id,
        scores(5.0, 3.0, None),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HotsError::Validation(_)));

    assert!(
        storage
            .get_evaluation_by_submission_id(&submitted.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[tokio::test]
async fn test_other_student_cannot_read_evaluation() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let owner = common::seed_user(storage.as_ref(), "owner@school.id", UserRole::Student).await;
    let other = common::seed_user(storage.as_ref(), "other@school.id", UserRole::Student).await;
    let rubric = common::seed_rubric(storage.as_ref(), &teacher).await;
    let assignment =
        common::seed_assignment(storage.as_ref(), &teacher, Some(rubric.id.clone()), true).await;
    let submitted = submit_assignment(storage.as_ref(), &owner, &assignment.id, submission(false))
        .await
        .unwrap();

    assert!(
        load_evaluation_view(storage.as_ref(), &owner, &submitted.id)
            .await
            .unwrap()
            .is_none()
    );
    let err = load_evaluation_view(storage.as_ref(), &other, &submitted.id)
        .await
        .unwrap_err();
    assert!(matches!(err, HotsError::Authorization(_)));
}

#[tokio::test]
async fn test_rubric_with_total_criterion_id_is_rejected() {
    let storage = common::memory_storage().await;
    let teacher = common::seed_user(storage.as_ref(), "teacher@school.id", UserRole::Teacher).await;
    let criterion = |id: &str| CriterionInput {
        id: Some(id.to_string()),
        name: id.to_string(),
        description: String::new(),
        weight: 50.0,
        levels: vec![],
    };

    let err = save_rubric(
        storage.as_ref(),
        &teacher.id,
        CreateRubricRequest {
            title: "Collides with the stored total".to_string(),
            description: None,
            max_score: 100.0,
            criteria: vec![criterion("total"), criterion("other")],
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, HotsError::Validation(_)));

    let listed = storage
        .list_rubrics_with_pagination(
            serde_json::from_value(serde_json::json!({})).unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(listed.pagination.total, 0);
}
