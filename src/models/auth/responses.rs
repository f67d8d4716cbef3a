use crate::models::users::entities::User;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: User,
    /// 会话剩余有效期（秒）
    pub expires_in: u64,
}
