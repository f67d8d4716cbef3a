use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::models::{MessageResponse, auth::requests::LoginRequest, auth::responses::LoginResponse};
use crate::utils::password::{verify_dummy, verify_password};
use crate::utils::session::{create_session, session_cookie};

use super::AuthService;

const LOGIN_FAILED: &str = "Incorrect email or password.";

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    // 1. 按邮箱查找用户
    let user = match storage.get_user_by_email(login_request.email.trim()).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            verify_dummy(&login_request.password);
            tracing::info!("Login rejected: unknown email");
            return Ok(MessageResponse::new(LOGIN_FAILED).respond(StatusCode::UNAUTHORIZED));
        }
        Err(e) => {
            tracing::error!("Login lookup failed: {}", e);
            return Ok(MessageResponse::new(format!("Login failed: {}", e.message()))
                .respond(StatusCode::INTERNAL_SERVER_ERROR));
        }
    };

    // 2. 校验密码
    if !verify_password(&login_request.password, &user.password_hash) {
        tracing::info!("Login rejected for user {}: wrong password", user.id);
        return Ok(MessageResponse::new(LOGIN_FAILED).respond(StatusCode::UNAUTHORIZED));
    }

    // 3. 写入会话并下发 Cookie
    let cache = service.get_cache(request)?;
    let ttl = config.session.ttl;
    let sid = create_session(cache.as_ref(), user.id, ttl).await;
    let cookie = session_cookie(&config.session.cookie_name, sid, ttl, config.session.secure);

    tracing::info!("User {} logged in successfully", user.id);

    Ok(HttpResponse::Ok().cookie(cookie).json(LoginResponse {
        user,
        expires_in: ttl,
    }))
}
