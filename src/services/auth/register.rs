use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, http::StatusCode};

use crate::models::{
    MessageResponse, Resource,
    auth::requests::RegisterRequest,
    response::error_response,
    users::{entities::User, requests::CreateUserRequest},
};
use crate::storage::{CrudStorage, Storage};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let role_name = &service.get_config().auth.default_role;

    // 1. 查找默认角色
    let role = match storage.get_user_role_by_name(role_name).await {
        Ok(Some(role)) => role,
        Ok(None) => {
            tracing::error!("Default role '{}' does not exist", role_name);
            return Ok(
                MessageResponse::new(format!("Registration is unavailable: role '{role_name}' is missing."))
                    .respond(StatusCode::INTERNAL_SERVER_ERROR),
            );
        }
        Err(e) => {
            tracing::error!("Failed to look up default role: {}", e);
            return Ok(error_response(&e, None));
        }
    };

    let mut create_request = CreateUserRequest {
        email: register_request.email.trim().to_string(),
        password: register_request.password,
        name: register_request.name,
        work_education_center_id: None,
        user_role_id: role.id,
        profile_image: None,
    };

    // 2. 校验邮箱与密码策略
    if let Err(msg) = User::validate_create(&create_request) {
        return Ok(MessageResponse::new(msg).respond(StatusCode::BAD_REQUEST));
    }

    // 3. 哈希密码
    if let Err(e) = User::prepare_create(&mut create_request) {
        tracing::error!("Password hashing failed: {}", e);
        return Ok(error_response(&e, None));
    }

    // 4. 创建用户，邮箱重复由唯一约束报告为 409
    match <dyn Storage as CrudStorage<User>>::create_record(storage.as_ref(), create_request).await
    {
        Ok(user) => {
            tracing::info!("User {} registered", user.id);
            Ok(HttpResponse::Created().json(user))
        }
        Err(e) => {
            tracing::warn!("Registration failed: {}", e);
            Ok(error_response(&e, None))
        }
    }
}
