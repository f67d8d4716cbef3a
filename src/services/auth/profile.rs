use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::middlewares::RequireSession;
use crate::models::MessageResponse;

/// 返回会话中间件放入请求扩展的用户
pub async fn handle_me(request: &HttpRequest) -> ActixResult<HttpResponse> {
    match RequireSession::current_user(request) {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Ok(MessageResponse::new("Unauthorized: no active session")
            .respond(StatusCode::UNAUTHORIZED)),
    }
}
