use serde::Deserialize;
use serde_json::Value;
use ts_rs::TS;

use super::entities::ChecklistItem;
use crate::utils::json::parse_json_column;

/// 保存草稿 / 提交作业请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitAssignmentRequest {
    /// 已有提交的 ID；为空时新建
    pub submission_id: Option<String>,
    pub text_response: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub document_urls: Vec<String>,
    /// 清单项，缺失字段在服务端补全
    #[serde(default)]
    pub checklist: Vec<Value>,
    #[serde(default)]
    pub is_draft: bool,
    #[serde(default = "default_version")]
    pub version: i32,
}

fn default_version() -> i32 {
    1
}

// 存储层使用的提交写入参数
#[derive(Debug, Clone)]
pub struct SubmissionUpsert {
    pub submission_id: Option<String>,
    pub assignment_id: String,
    pub student_id: String,
    pub text_response: Option<String>,
    pub audio_url: Option<String>,
    pub video_url: Option<String>,
    pub document_urls: Vec<String>,
    pub checklist: Vec<ChecklistItem>,
    pub is_draft: bool,
    pub version: i32,
}

impl SubmitAssignmentRequest {
    pub fn into_upsert(self, assignment_id: &str, student_id: &str) -> SubmissionUpsert {
        SubmissionUpsert {
            submission_id: non_blank(self.submission_id),
            assignment_id: assignment_id.to_string(),
            student_id: student_id.to_string(),
            text_response: self.text_response,
            audio_url: non_blank(self.audio_url),
            video_url: non_blank(self.video_url),
            document_urls: normalize_document_urls(self.document_urls),
            checklist: normalize_checklist(self.checklist),
            is_draft: self.is_draft,
            version: self.version.max(1),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// 去除空白文档链接，保留顺序
pub fn normalize_document_urls(urls: Vec<String>) -> Vec<String> {
    urls.into_iter()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
        .collect()
}

/// 将任意 JSON 清单项补全为 {id, text, checked}
pub fn normalize_checklist(items: Vec<Value>) -> Vec<ChecklistItem> {
    items
        .iter()
        .enumerate()
        .map(|(idx, item)| coerce_checklist_item(idx, item))
        .collect()
}

/// 读取清单列，旧数据或损坏内容退回空清单
pub fn parse_checklist(raw: Option<&str>) -> Vec<ChecklistItem> {
    match parse_json_column(raw, Value::Array(vec![])) {
        Value::Array(items) => normalize_checklist(items),
        _ => Vec::new(),
    }
}

pub(crate) fn coerce_checklist_item(idx: usize, item: &Value) -> ChecklistItem {
    let id = match item.get("id") {
        Some(Value::String(s)) if !s.trim().is_empty() => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => format!("item-{}", idx + 1),
    };
    let text = item
        .get("text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let checked = item.get("checked").and_then(Value::as_bool).unwrap_or(false);

    ChecklistItem { id, text, checked }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_urls_drop_blanks() {
        let urls = normalize_document_urls(vec![
            " https://x.com/a.pdf ".to_string(),
            "".to_string(),
            "   ".to_string(),
            "https://x.com/b.pdf".to_string(),
        ]);
        assert_eq!(urls, vec!["https://x.com/a.pdf", "https://x.com/b.pdf"]);
    }

    #[test]
    fn test_checklist_defaults() {
        let items = normalize_checklist(vec![
            json!({"id": "read", "text": "I read the text", "checked": true}),
            json!({"text": "I cited evidence"}),
            json!({"id": 7, "checked": "yes"}),
            json!(null),
        ]);
        assert_eq!(
            items[0],
            ChecklistItem {
                id: "read".to_string(),
                text: "I read the text".to_string(),
                checked: true,
            }
        );
        assert_eq!(items[1].id, "item-2");
        assert!(!items[1].checked);
        assert_eq!(items[2].id, "7");
        assert_eq!(items[2].text, "");
        assert!(!items[2].checked);
        assert_eq!(items[3].id, "item-4");
    }

    #[test]
    fn test_into_upsert_trims_optional_fields() {
        let req: SubmitAssignmentRequest = serde_json::from_value(json!({
            "submission_id": "",
            "text_response": "My answer",
            "audio_url": "  ",
            "is_draft": true
        }))
        .unwrap();
        let upsert = req.into_upsert("a1", "s1");
        assert_eq!(upsert.submission_id, None);
        assert_eq!(upsert.audio_url, None);
        assert_eq!(upsert.text_response.as_deref(), Some("My answer"));
        assert_eq!(upsert.version, 1);
        assert!(upsert.is_draft);
    }

    #[test]
    fn test_parse_checklist_column() {
        let checklist = parse_checklist(Some(r#"[{"text":"Outline"}]"#));
        assert_eq!(checklist[0].id, "item-1");
        assert_eq!(checklist[0].text, "Outline");
        assert!(parse_checklist(Some("{broken")).is_empty());
        assert!(parse_checklist(None).is_empty());
    }

    #[test]
    fn test_into_upsert_keeps_text_response_as_given() {
        let req: SubmitAssignmentRequest = serde_json::from_value(json!({
            "text_response": "   ",
            "video_url": " https://x.com/v.mp4 "
        }))
        .unwrap();
        let upsert = req.into_upsert("a1", "s1");
        assert_eq!(upsert.text_response.as_deref(), Some("   "));
        assert_eq!(upsert.video_url.as_deref(), Some(" https://x.com/v.mp4 "));
    }
}
