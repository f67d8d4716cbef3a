pub mod extractor;
pub mod parameter_error_handler;
pub mod password;
pub mod session;
pub mod sql;
pub mod validate;

pub use extractor::SafeId;
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
