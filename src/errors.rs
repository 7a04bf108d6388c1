//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。
//! 存储层与外部服务统一返回 `PortalError`，由服务层转换为 HTTP 响应。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_portal_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PortalError {
            $($variant(String),)*
        }

        impl PortalError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PortalError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PortalError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PortalError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PortalError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_portal_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    Serialization("E007", "Serialization Error"),
    ExternalService("E008", "External Service Error"),
}

impl PortalError {
    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PortalError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for PortalError {
    fn from(err: sea_orm::DbErr) -> Self {
        PortalError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(err: serde_json::Error) -> Self {
        PortalError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for PortalError {
    fn from(err: reqwest::Error) -> Self {
        PortalError::ExternalService(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PortalError::cache_connection("test").code(), "E001");
        assert_eq!(PortalError::database_config("test").code(), "E003");
        assert_eq!(PortalError::validation("test").code(), "E006");
        assert_eq!(PortalError::external_service("test").code(), "E008");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PortalError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            PortalError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PortalError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = PortalError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }

    #[test]
    fn test_external_service_error() {
        let err = PortalError::external_service("gemini returned 503");
        assert_eq!(err.code(), "E008");
        assert_eq!(err.error_type(), "External Service Error");
        assert_eq!(err.to_string(), "External Service Error: gemini returned 503");
    }

    #[test]
    fn test_from_serde_json_error() {
        let parse_err = serde_json::from_str::<Vec<String>>("not json").unwrap_err();
        let err: PortalError = parse_err.into();
        assert_eq!(err.code(), "E007");
    }
}
