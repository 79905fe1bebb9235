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
macro_rules! define_feedbacksys_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum FeedbackSysError {
            $($variant(String),)*
        }

        impl FeedbackSysError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(FeedbackSysError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(FeedbackSysError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(FeedbackSysError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl FeedbackSysError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        FeedbackSysError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_feedbacksys_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    CsvParse("E006", "CSV Parse Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    StoragePluginNotFound("E010", "Storage Plugin Not Found"),
    DateParse("E011", "Date Parse Error"),
    Authentication("E012", "Authentication Error"),
    Authorization("E013", "Authorization Error"),
    Conflict("E014", "Conflict Error"),
}

impl FeedbackSysError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for FeedbackSysError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for FeedbackSysError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for FeedbackSysError {
    fn from(err: sea_orm::DbErr) -> Self {
        FeedbackSysError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for FeedbackSysError {
    fn from(err: std::io::Error) -> Self {
        FeedbackSysError::CsvParse(err.to_string())
    }
}

impl From<serde_json::Error> for FeedbackSysError {
    fn from(err: serde_json::Error) -> Self {
        FeedbackSysError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for FeedbackSysError {
    fn from(err: chrono::ParseError) -> Self {
        FeedbackSysError::DateParse(err.to_string())
    }
}

impl From<csv::Error> for FeedbackSysError {
    fn from(err: csv::Error) -> Self {
        FeedbackSysError::CsvParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FeedbackSysError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(FeedbackSysError::cache_connection("test").code(), "E001");
        assert_eq!(FeedbackSysError::database_config("test").code(), "E003");
        assert_eq!(FeedbackSysError::validation("test").code(), "E007");
        assert_eq!(FeedbackSysError::authentication("test").code(), "E012");
        assert_eq!(FeedbackSysError::conflict("test").code(), "E014");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            FeedbackSysError::csv_parse("test").error_type(),
            "CSV Parse Error"
        );
        assert_eq!(
            FeedbackSysError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = FeedbackSysError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = FeedbackSysError::validation("Invalid form name");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid form name"));
    }
}
