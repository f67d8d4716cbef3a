//! 统一错误处理模块
//!
//! 使用宏生成错误类型，每个变体带有错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 生成 enum 本体、`code()` / `error_type()` / `message()` 访问器，
/// 以及 snake_case 形式的构造函数（例如 `EduCenterError::not_found("..")`）。
macro_rules! define_educenter_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum EduCenterError {
            $($variant(String),)*
        }

        impl EduCenterError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(EduCenterError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(EduCenterError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(EduCenterError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl EduCenterError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        EduCenterError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_educenter_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Io("E006", "IO Error"),
    Validation("E007", "Validation Error"),
    NotFound("E008", "Resource Not Found"),
    Serialization("E009", "Serialization Error"),
    Conflict("E010", "Conflict"),
    PasswordHash("E011", "Password Hash Error"),
    Authentication("E012", "Authentication Error"),
}

impl EduCenterError {
    /// 开发环境下的彩色输出
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }

    /// 对应的 HTTP 状态码
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;
        match self {
            EduCenterError::Validation(_) => StatusCode::BAD_REQUEST,
            EduCenterError::NotFound(_) => StatusCode::NOT_FOUND,
            EduCenterError::Conflict(_) => StatusCode::CONFLICT,
            EduCenterError::Authentication(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for EduCenterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for EduCenterError {}

impl From<sea_orm::DbErr> for EduCenterError {
    fn from(err: sea_orm::DbErr) -> Self {
        EduCenterError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for EduCenterError {
    fn from(err: std::io::Error) -> Self {
        EduCenterError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for EduCenterError {
    fn from(err: serde_json::Error) -> Self {
        EduCenterError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EduCenterError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_error_codes() {
        assert_eq!(EduCenterError::cache_connection("test").code(), "E001");
        assert_eq!(EduCenterError::database_config("test").code(), "E003");
        assert_eq!(EduCenterError::validation("test").code(), "E007");
        assert_eq!(EduCenterError::conflict("test").code(), "E010");
        assert_eq!(EduCenterError::authentication("test").code(), "E012");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            EduCenterError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            EduCenterError::not_found("test").error_type(),
            "Resource Not Found"
        );
    }

    #[test]
    fn test_error_message() {
        let err = EduCenterError::validation("rating must be between 1 and 5");
        assert_eq!(err.message(), "rating must be between 1 and 5");
    }

    #[test]
    fn test_format_simple() {
        let err = EduCenterError::database_operation("UNIQUE constraint failed");
        let formatted = err.format_simple();
        assert!(formatted.contains("Database Operation Error"));
        assert!(formatted.contains("UNIQUE constraint failed"));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            EduCenterError::validation("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            EduCenterError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            EduCenterError::conflict("x").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            EduCenterError::database_operation("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_db_err_conversion() {
        let err: EduCenterError = sea_orm::DbErr::Custom("boom".into()).into();
        assert_eq!(err.code(), "E005");
        assert!(err.message().contains("boom"));
    }
}
