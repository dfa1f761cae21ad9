use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::evaluations::{Column as EvaluationColumn, Entity as Evaluations};
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{HotsError, Result};
use crate::models::{
    PaginatedResponse, PaginationInfo, PaginationQuery,
    evaluations::scoring::derive_status,
    submissions::{
        entities::Submission,
        requests::SubmissionUpsert,
        responses::{SubmissionListItem, SubmissionStudent},
    },
};
use crate::utils::safe_json_stringify;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 保存提交
    ///
    /// - 带 `submission_id`：更新该行，`revised_at` 置为当前时间，
    ///   草稿清空 `submitted_at`，正式提交设为当前时间
    /// - 不带 `submission_id`：插入新行
    pub async fn upsert_submission_impl(&self, req: SubmissionUpsert) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();
        let document_urls = safe_json_stringify(&req.document_urls, "[]");
        let checklist = safe_json_stringify(&req.checklist, "[]");

        let model = match req.submission_id {
            Some(ref submission_id) => {
                let existing = Submissions::find_by_id(submission_id.clone())
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        HotsError::database_operation(format!("Failed to query submission: {e}"))
                    })?
                    .ok_or_else(|| {
                        HotsError::not_found(format!("Submission {submission_id} not found"))
                    })?;

                if existing.student_id != req.student_id
                    || existing.assignment_id != req.assignment_id
                {
                    return Err(HotsError::authorization(
                        "Submission does not belong to this student and assignment",
                    ));
                }

                let mut model: ActiveModel = existing.into();
                model.text_response = Set(req.text_response);
                model.audio_url = Set(req.audio_url);
                model.video_url = Set(req.video_url);
                model.document_urls = Set(document_urls);
                model.checklist = Set(checklist);
                model.is_draft = Set(req.is_draft);
                model.version = Set(req.version);
                model.revised_at = Set(Some(now));
                model.submitted_at = Set((!req.is_draft).then_some(now));
                model.updated_at = Set(now);

                model.update(&self.db).await.map_err(|e| {
                    HotsError::database_operation(format!("Failed to update submission: {e}"))
                })?
            }
            None => {
                let model = ActiveModel {
                    id: Set(uuid::Uuid::new_v4().to_string()),
                    assignment_id: Set(req.assignment_id),
                    student_id: Set(req.student_id),
                    text_response: Set(req.text_response),
                    audio_url: Set(req.audio_url),
                    video_url: Set(req.video_url),
                    document_urls: Set(document_urls),
                    checklist: Set(checklist),
                    is_draft: Set(req.is_draft),
                    version: Set(req.version),
                    submitted_at: Set((!req.is_draft).then_some(now)),
                    revised_at: Set(None),
                    created_at: Set(now),
                    updated_at: Set(now),
                };

                model.insert(&self.db).await.map_err(|e| {
                    HotsError::database_operation(format!("Failed to create submission: {e}"))
                })?
            }
        };

        Ok(model.into_submission())
    }

    pub async fn get_submission_by_id_impl(&self, id: &str) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id.to_string())
            .one(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query submission: {e}"))
            })?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 学生在某作业下的最新提交：版本最高，其次最近更新
    pub async fn get_latest_submission_impl(
        &self,
        assignment_id: &str,
        student_id: &str,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::Version)
            .order_by_desc(Column::UpdatedAt)
            .one(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query submission: {e}"))
            })?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 教师查看某作业的提交列表，附带学生信息与评价状态
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: &str,
        query: PaginationQuery,
    ) -> Result<PaginatedResponse<SubmissionListItem>> {
        let (page, size) = query.normalized();

        let paginator = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_desc(Column::UpdatedAt)
            .paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            HotsError::database_operation(format!("Failed to count submissions: {e}"))
        })?;
        let submissions = paginator.fetch_page(page - 1).await.map_err(|e| {
            HotsError::database_operation(format!("Failed to list submissions: {e}"))
        })?;

        let student_ids: Vec<String> = submissions.iter().map(|s| s.student_id.clone()).collect();
        let submission_ids: Vec<String> = submissions.iter().map(|s| s.id.clone()).collect();

        let students: HashMap<String, SubmissionStudent> = Users::find()
            .filter(UserColumn::Id.is_in(student_ids))
            .all(&self.db)
            .await
            .map_err(|e| HotsError::database_operation(format!("Failed to query students: {e}")))?
            .into_iter()
            .map(|u| {
                (
                    u.id.clone(),
                    SubmissionStudent {
                        id: u.id,
                        name: u.name,
                        email: u.email,
                    },
                )
            })
            .collect();

        let evaluations: HashMap<String, _> = Evaluations::find()
            .filter(EvaluationColumn::SubmissionId.is_in(submission_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                HotsError::database_operation(format!("Failed to query evaluations: {e}"))
            })?
            .into_iter()
            .map(|m| {
                let evaluation = m.into_evaluation();
                (evaluation.submission_id.clone(), evaluation)
            })
            .collect();

        let items = submissions
            .into_iter()
            .map(|m| {
                let evaluation = evaluations.get(&m.id);
                let student = students.get(&m.student_id).cloned();
                SubmissionListItem {
                    total_score: evaluation.map(|e| e.total_score()),
                    status: evaluation
                        .map(|e| derive_status(e.total_score(), e.general_feedback.as_deref())),
                    student,
                    submission: m.into_submission(),
                }
            })
            .collect();

        Ok(PaginatedResponse {
            items,
            pagination: PaginationInfo::new(page, size, total),
        })
    }
}
