use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRoleRequest {
    pub role_name: String,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRoleRequest {
    pub role_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserRoleFilter {
    /// 按角色名模糊匹配
    pub search: Option<String>,
}

// 用户创建请求；写入存储前 password 会被替换为哈希
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub work_education_center_id: Option<i64>,
    pub user_role_id: i64,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub work_education_center_id: Option<i64>,
    pub user_role_id: Option<i64>,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct UserFilter {
    pub user_role_id: Option<i64>,
    pub work_education_center_id: Option<i64>,
    /// 按姓名或邮箱模糊匹配
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkerRequest {
    pub email: String,
    pub password: String,
    pub name: String,
    pub work_education_center_id: i64,
    pub user_role_id: i64,
    pub profile_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct WorkerFilter {
    pub work_education_center_id: Option<i64>,
    /// 按姓名或邮箱模糊匹配
    pub search: Option<String>,
}
