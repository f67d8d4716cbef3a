use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::MessageResponse;
use crate::utils::session::{destroy_session, removal_cookie};

use super::AuthService;

/// 删除缓存中的会话并让浏览器丢弃 Cookie；没有会话时同样返回 200
pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    let cookie_name = &config.session.cookie_name;

    if let Some(cookie) = request.cookie(cookie_name) {
        let cache = service.get_cache(request)?;
        destroy_session(cache.as_ref(), cookie.value()).await;
    }

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(cookie_name, config.session.secure))
        .json(MessageResponse::new("Logged out successfully.")))
}
