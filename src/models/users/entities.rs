use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::requests::{
    CreateUserRequest, CreateUserRoleRequest, CreateWorkerRequest, UpdateUserRequest,
    UpdateUserRoleRequest, UserFilter, UserRoleFilter, WorkerFilter,
};
use crate::errors::Result;
use crate::models::common::Resource;
use crate::models::common::resource::{check_len, check_len_opt};
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_email, validate_password_simple};

/// 内置角色名，启动时若角色表为空则写入
pub const BUILTIN_ROLES: [&str; 3] = ["admin", "worker", "user"];

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRole {
    pub id: i64,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)] // 不出现在任何 JSON 中
    pub password_hash: String,
    pub name: String,
    pub work_education_center_id: Option<i64>,
    pub user_role_id: i64,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 员工：设置了工作单位（教育中心）的用户
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Worker {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub work_education_center_id: i64,
    pub user_role_id: i64,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_account(email: Option<&String>, password: Option<&String>) -> std::result::Result<(), String> {
    if let Some(email) = email {
        check_len("email", email, 100)?;
        validate_email(email).map_err(str::to_string)?;
    }
    if let Some(password) = password {
        validate_password_simple(password)?;
    }
    Ok(())
}

impl Resource for UserRole {
    type Create = CreateUserRoleRequest;
    type Update = UpdateUserRoleRequest;
    type Filter = UserRoleFilter;

    const NAME: &'static str = "UserRole";
    const PATH: &'static str = "userRoles";

    fn validate_create(req: &Self::Create) -> std::result::Result<(), String> {
        check_len("roleName", &req.role_name, 255)
    }

    fn validate_update(req: &Self::Update) -> std::result::Result<(), String> {
        check_len_opt("roleName", req.role_name.as_ref(), 255)
    }
}

impl Resource for User {
    type Create = CreateUserRequest;
    type Update = UpdateUserRequest;
    type Filter = UserFilter;

    const NAME: &'static str = "User";
    const PATH: &'static str = "users";

    fn validate_create(req: &Self::Create) -> std::result::Result<(), String> {
        check_account(Some(&req.email), Some(&req.password))?;
        check_len("name", &req.name, 100)
    }

    fn validate_update(req: &Self::Update) -> std::result::Result<(), String> {
        check_account(req.email.as_ref(), req.password.as_ref())?;
        check_len_opt("name", req.name.as_ref(), 100)
    }

    fn prepare_create(req: &mut Self::Create) -> Result<()> {
        req.password = hash_password(&req.password)?;
        Ok(())
    }

    fn prepare_update(req: &mut Self::Update) -> Result<()> {
        if let Some(password) = req.password.as_mut() {
            *password = hash_password(password)?;
        }
        Ok(())
    }
}

impl Resource for Worker {
    type Create = CreateWorkerRequest;
    type Update = UpdateUserRequest;
    type Filter = WorkerFilter;

    const NAME: &'static str = "Worker";
    const PATH: &'static str = "workers";

    fn validate_create(req: &Self::Create) -> std::result::Result<(), String> {
        check_account(Some(&req.email), Some(&req.password))?;
        check_len("name", &req.name, 100)
    }

    fn validate_update(req: &Self::Update) -> std::result::Result<(), String> {
        <User as Resource>::validate_update(req)
    }

    fn prepare_create(req: &mut Self::Create) -> Result<()> {
        req.password = hash_password(&req.password)?;
        Ok(())
    }

    fn prepare_update(req: &mut Self::Update) -> Result<()> {
        <User as Resource>::prepare_update(req)
    }
}

impl From<CreateWorkerRequest> for CreateUserRequest {
    fn from(req: CreateWorkerRequest) -> Self {
        Self {
            email: req.email,
            password: req.password,
            name: req.name,
            work_education_center_id: Some(req.work_education_center_id),
            user_role_id: req.user_role_id,
            profile_image: req.profile_image,
        }
    }
}

impl User {
    /// 仅当用户设置了工作单位时才是员工
    pub fn into_worker(self) -> Option<Worker> {
        let work_education_center_id = self.work_education_center_id?;
        Some(Worker {
            id: self.id,
            email: self.email,
            name: self.name,
            work_education_center_id,
            user_role_id: self.user_role_id,
            profile_image: self.profile_image,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 1,
            email: "mentor@example.com".into(),
            password_hash: "$argon2id$v=19$secret".into(),
            name: "Aziza".into(),
            work_education_center_id: None,
            user_role_id: 2,
            profile_image: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(sample_user()).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["userRoleId"], 2);
    }

    #[test]
    fn test_into_worker_requires_workplace() {
        assert!(sample_user().into_worker().is_none());

        let mut user = sample_user();
        user.work_education_center_id = Some(5);
        let worker = user.into_worker().unwrap();
        assert_eq!(worker.work_education_center_id, 5);
    }

    #[test]
    fn test_user_validation() {
        let req = CreateUserRequest {
            email: "not-an-email".into(),
            password: "SecurePass123".into(),
            name: "Bobur".into(),
            work_education_center_id: None,
            user_role_id: 1,
            profile_image: None,
        };
        assert_eq!(
            User::validate_create(&req),
            Err("Email format is invalid".to_string())
        );

        let req = CreateUserRequest {
            email: "bobur@example.com".into(),
            password: "short".into(),
            ..req
        };
        assert!(User::validate_create(&req).is_err());
    }
}
