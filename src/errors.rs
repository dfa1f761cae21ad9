//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_hots_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum HotsError {
            $($variant(String),)*
        }

        impl HotsError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(HotsError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(HotsError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(HotsError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl HotsError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        HotsError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_hots_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    FileOperation("E004", "File Operation Error"),
    Validation("E005", "Validation Error"),
    NotFound("E006", "Resource Not Found"),
    Conflict("E007", "Resource Conflict"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    Authentication("E010", "Authentication Error"),
    Authorization("E011", "Authorization Error"),
    PasswordHash("E012", "Password Hash Error"),
}

impl HotsError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for HotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for HotsError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for HotsError {
    fn from(err: sea_orm::DbErr) -> Self {
        HotsError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for HotsError {
    fn from(err: std::io::Error) -> Self {
        HotsError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for HotsError {
    fn from(err: serde_json::Error) -> Self {
        HotsError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for HotsError {
    fn from(err: chrono::ParseError) -> Self {
        HotsError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, HotsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(HotsError::database_config("test").code(), "E001");
        assert_eq!(HotsError::validation("test").code(), "E005");
        assert_eq!(HotsError::conflict("test").code(), "E007");
        assert_eq!(HotsError::password_hash("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            HotsError::not_found("test").error_type(),
            "Resource Not Found"
        );
        assert_eq!(
            HotsError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = HotsError::validation("Weights must sum to 100");
        assert_eq!(err.message(), "Weights must sum to 100");
    }

    #[test]
    fn test_format_simple() {
        let err = HotsError::authorization("Not your submission");
        let formatted = err.format_simple();
        assert!(formatted.contains("Authorization Error"));
        assert!(formatted.contains("Not your submission"));
    }

    #[test]
    fn test_from_serde_error() {
        let err: HotsError = serde_json::from_str::<Vec<String>>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), "E008");
    }
}
