use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业说明
    pub description: Option<String>,
    // 关联的活动（与模块二选一，可都为空）
    pub activity_id: Option<String>,
    // 关联的模块
    pub module_id: Option<String>,
    // 评分量规
    pub rubric_id: Option<String>,
    // 截止时间
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    // 是否已发布（学生可见）
    pub is_published: bool,
    // 是否为挑战题
    pub is_challenge: bool,
    // 创建者 ID
    pub created_by: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
