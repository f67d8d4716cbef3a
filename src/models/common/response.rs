use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::EduCenterError;

/// 仅包含一条消息的响应体，用于删除成功与各类错误
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: i64) -> Self {
        Self::new(format!("Not found {resource} with id {id}."))
    }

    pub fn deleted(resource: &str, id: i64) -> Self {
        Self::new(format!("{resource} with id {id} was deleted successfully!"))
    }

    pub fn respond(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

impl From<&EduCenterError> for MessageResponse {
    fn from(err: &EduCenterError) -> Self {
        Self::new(err.message())
    }
}

/// 按错误类型生成响应；`fallback` 用于覆盖 500 时的消息
pub fn error_response(err: &EduCenterError, fallback: Option<String>) -> HttpResponse {
    let status = err.status_code();
    let body = match fallback {
        Some(message) if status == StatusCode::INTERNAL_SERVER_ERROR => {
            MessageResponse::new(message)
        }
        _ => MessageResponse::from(err),
    };
    body.respond(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            MessageResponse::not_found("Branch", 7).message,
            "Not found Branch with id 7."
        );
        assert_eq!(
            MessageResponse::deleted("City", 3).message,
            "City with id 3 was deleted successfully!"
        );
    }

    #[test]
    fn test_error_response_status() {
        let resp = error_response(&EduCenterError::conflict("taken"), None);
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = error_response(
            &EduCenterError::database_operation("disk I/O error"),
            Some("Error updating Course with id 1".into()),
        );
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    async fn body_message(resp: HttpResponse) -> String {
        let bytes = actix_web::body::to_bytes(resp.into_body())
            .await
            .expect("read body");
        let body: MessageResponse = serde_json::from_slice(&bytes).expect("message body");
        body.message
    }

    #[actix_web::test]
    async fn test_storage_error_text_is_kept_without_fallback() {
        let err = EduCenterError::database_operation("FOREIGN KEY constraint failed");
        let resp = error_response(&err, None);
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(resp).await, "FOREIGN KEY constraint failed");

        let resp = error_response(&err, Some("Could not delete Branch with id 4".into()));
        assert_eq!(body_message(resp).await, "Could not delete Branch with id 4");
    }
}
