use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

use crate::models::common::PaginationQuery;

/// 创建作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub activity_id: Option<String>,
    pub module_id: Option<String>,
    pub rubric_id: Option<String>,
    pub due_date: Option<DateTime<Utc>>, // ISO 8601 格式，如 "2026-01-24T12:00:00Z"
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_challenge: bool,
}

impl CreateAssignmentRequest {
    pub fn validate(&self) -> Result<(), String> {
        let title_len = self.title.trim().chars().count();
        if title_len == 0 || title_len > 200 {
            return Err("Assignment title must be between 1 and 200 characters".to_string());
        }
        if self.activity_id.is_some() && self.module_id.is_some() {
            return Err("An assignment references either an activity or a module, not both".to_string());
        }
        Ok(())
    }
}

/// 作业列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListParams {
    // bool 筛选无法与 flatten 的分页参数共用，这里单独声明
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub published: Option<bool>,
    pub challenge: Option<bool>,
}

impl AssignmentListParams {
    pub fn pagination(&self) -> PaginationQuery {
        let defaults = PaginationQuery::default();
        PaginationQuery {
            page: self.page.unwrap_or(defaults.page),
            size: self.size.unwrap_or(defaults.size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            title: "Analyse a news article".to_string(),
            description: None,
            activity_id: None,
            module_id: None,
            rubric_id: None,
            due_date: None,
            is_published: true,
            is_challenge: false,
        }
    }

    #[test]
    fn test_rejects_activity_and_module_together() {
        let mut req = request();
        req.activity_id = Some("a1".to_string());
        req.module_id = Some("m1".to_string());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_allows_neither_reference() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_rejects_blank_title() {
        let mut req = request();
        req.title = "   ".to_string();
        assert!(req.validate().is_err());
    }
}
