use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 提交清单项
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct ChecklistItem {
    pub id: String,
    pub text: String,
    pub checked: bool,
}

/// 学生对作业的一次提交
///
/// 草稿：`is_draft = true` 且 `submitted_at` 为空；正式提交后 `submitted_at`
/// 为提交时间；根据反馈修改时 `revised_at` 为最近一次更新时间。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: String,
    pub assignment_id: String,
    pub student_id: String,
    pub text_response: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    pub document_urls: Vec<String>,
    pub checklist: Vec<ChecklistItem>,
    pub is_draft: bool,
    pub version: i32,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub revised_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
