use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::FieldErrors;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("Invalid email regex")
});
static UPPERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]").expect("Invalid regex"));
static LOWERCASE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]").expect("Invalid regex"));
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]").expect("Invalid regex"));

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const PASSWORD_MIN_CHARS: usize = 8;

/// 字段错误收集器
#[derive(Debug, Default)]
pub struct FieldErrorsBuilder {
    errors: FieldErrors,
}

impl FieldErrorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// 将校验结果并入指定字段
    pub fn check(&mut self, field: &str, result: Result<(), Vec<&'static str>>) {
        if let Err(messages) = result {
            for message in messages {
                self.add(field, message);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn finish(self) -> Result<(), FieldErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

pub fn validate_name(name: &str) -> Result<(), Vec<&'static str>> {
    let len = name.trim().chars().count();
    if len < NAME_MIN_CHARS {
        return Err(vec!["Name must be at least 2 characters"]);
    }
    if len > NAME_MAX_CHARS {
        return Err(vec!["Name must be at most 100 characters"]);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), Vec<&'static str>> {
    if !EMAIL_RE.is_match(email) {
        return Err(vec!["Email format is invalid"]);
    }
    Ok(())
}

/// 密码策略：至少 8 个字符，包含大写字母、小写字母和数字
pub fn validate_password(password: &str) -> Result<(), Vec<&'static str>> {
    let mut errors = Vec::new();

    if password.chars().count() < PASSWORD_MIN_CHARS {
        errors.push("Password must be at least 8 characters long");
    }
    if !UPPERCASE_RE.is_match(password) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !LOWERCASE_RE.is_match(password) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !DIGIT_RE.is_match(password) {
        errors.push("Password must contain at least one digit");
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// 标题：去除空白后 1..=max 个字符
pub fn validate_title(title: &str, max_chars: usize) -> Result<(), String> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err("Title is required".to_string());
    }
    if len > max_chars {
        return Err(format!("Title must be at most {max_chars} characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_password() {
        assert!(validate_password("SecurePass123").is_ok());
        assert!(validate_password("Abcdefg1").is_ok());
    }

    #[test]
    fn test_password_collects_every_failure() {
        let errors = validate_password("abc").unwrap_err();
        assert!(errors.contains(&"Password must be at least 8 characters long"));
        assert!(errors.contains(&"Password must contain at least one uppercase letter"));
        assert!(errors.contains(&"Password must contain at least one digit"));
        assert!(!errors.contains(&"Password must contain at least one lowercase letter"));
    }

    #[test]
    fn test_name_bounds() {
        assert!(validate_name("A").is_err());
        assert!(validate_name("Al").is_ok());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("siti@sekolah.sch.id").is_ok());
        assert!(validate_email("siti@").is_err());
        assert!(validate_email("not an email").is_err());
    }

    #[test]
    fn test_builder_groups_by_field() {
        let mut builder = FieldErrorsBuilder::new();
        builder.check("password", validate_password("short"));
        builder.add("confirm_password", "Passwords do not match");
        let errors = builder.finish().unwrap_err();
        assert!(errors["password"].len() >= 2);
        assert_eq!(errors["confirm_password"], vec!["Passwords do not match"]);
    }

    #[test]
    fn test_title() {
        assert!(validate_title("   ", 200).is_err());
        assert!(validate_title("Debate", 200).is_ok());
        assert!(validate_title(&"t".repeat(201), 200).is_err());
    }
}
