//! 容错的 JSON 读写
//!
//! 数据库中以文本保存的 JSON 列（文档链接、清单、评分、评语）可能是旧数据、
//! 单个 URL 或损坏的内容，读取时一律退回到调用方给出的默认值。

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;


/// 解析可能为 JSON 文本的值
///
/// - 已是对象或数组：原样返回
/// - 非字符串或空字符串：返回 `fallback`
/// - 解析失败且以 `http` 开头：`fallback` 为数组时包装为 `[value]`，否则返回字符串本身
/// - 其他解析失败：记录日志并返回 `fallback`
pub fn safe_json_parse(value: &Value, fallback: Value) -> Value {
    let text = match value {
        Value::Object(_) | Value::Array(_) => return value.clone(),
        Value::String(s) if !s.is_empty() => s,
        _ => return fallback,
    };

    match serde_json::from_str::<Value>(text) {
        Ok(parsed) => parsed,
        Err(_) if text.starts_with("http") => {
            if fallback.is_array() {
                Value::Array(vec![Value::String(text.clone())])
            } else {
                Value::String(text.clone())
            }
        }
        Err(e) => {
            warn!("Failed to parse JSON column value: {}", e);
            fallback
        }
    }
}

/// 序列化为 JSON 文本，失败时返回 `fallback`
pub fn safe_json_stringify<T: Serialize + ?Sized>(value: &T, fallback: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        warn!("Failed to serialize JSON column value: {}", e);
        fallback.to_string()
    })
}

/// 读取以文本保存的 JSON 列
pub fn parse_json_column(raw: Option<&str>, fallback: Value) -> Value {
    match raw {
        Some(text) => safe_json_parse(&Value::String(text.to_string()), fallback),
        None => fallback,
    }
}

/// 读取文档链接列，非字符串元素被忽略
pub fn parse_document_urls(raw: Option<&str>) -> Vec<String> {
    match parse_json_column(raw, Value::Array(vec![])) {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// 读取评分列，仅保留数值项
pub fn parse_score_map(raw: Option<&str>) -> BTreeMap<String, f64> {
    match parse_json_column(raw, Value::Object(Default::default())) {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| value.as_f64().map(|v| (key, v)))
            .collect(),
        _ => BTreeMap::new(),
    }
}

pub fn parse_feedback_map(raw: Option<&str>) -> BTreeMap<String, String> {
    match parse_json_column(raw, Value::Object(Default::default())) {
        Value::Object(map) => map
            .into_iter()
            .filter_map(|(key, value)| match value {
                Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect(),
        _ => BTreeMap::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_and_array_returned_unchanged() {
        let obj = json!({"total": 80, "c1": 3});
        for fallback in [json!([]), json!({}), json!(""), Value::Null] {
            assert_eq!(safe_json_parse(&obj, fallback), obj);
        }
        let arr = json!(["https://x.com/a.pdf"]);
        assert_eq!(safe_json_parse(&arr, json!({})), arr);
    }

    #[test]
    fn test_invalid_text_returns_fallback() {
        assert_eq!(safe_json_parse(&json!("not json"), json!([])), json!([]));
        assert_eq!(safe_json_parse(&json!(""), json!([])), json!([]));
        assert_eq!(safe_json_parse(&Value::Null, json!({})), json!({}));
        assert_eq!(safe_json_parse(&json!(42), json!([])), json!([]));
    }

    #[test]
    fn test_bare_url_follows_fallback_shape() {
        let url = json!("http://x.com/f.pdf");
        assert_eq!(
            safe_json_parse(&url, json!([])),
            json!(["http://x.com/f.pdf"])
        );
        assert_eq!(safe_json_parse(&url, json!("")), json!("http://x.com/f.pdf"));
    }

    #[test]
    fn test_valid_text_is_parsed() {
        assert_eq!(
            safe_json_parse(&json!(r#"["a","b"]"#), json!([])),
            json!(["a", "b"])
        );
    }

    #[test]
    fn test_stringify() {
        assert_eq!(safe_json_stringify(&vec!["a"], "[]"), r#"["a"]"#);
        let empty: Vec<String> = vec![];
        assert_eq!(safe_json_stringify(&empty, "[]"), "[]");
    }

    #[test]
    fn test_typed_parsers() {
        assert_eq!(
            parse_document_urls(Some("https://x.com/only.pdf")),
            vec!["https://x.com/only.pdf"]
        );
        assert!(parse_document_urls(Some("{broken")).is_empty());
        assert!(parse_document_urls(None).is_empty());

        let scores = parse_score_map(Some(r#"{"c1":3,"total":"n/a","c2":4}"#));
        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get("c2"), Some(&4.0));

        let feedback = parse_feedback_map(Some(r#"{"c1":"Good","c2":5}"#));
        assert_eq!(feedback.len(), 1);
    }
}
