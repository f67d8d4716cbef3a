use crate::cache::{ObjectCache, register::get_object_cache_plugin};
use crate::config::AppConfig;
use crate::errors::{EduCenterError, Result};
use crate::models::Resource;
use crate::models::users::entities::{BUILTIN_ROLES, User, UserRole};
use crate::models::users::requests::{CreateUserRequest, CreateUserRoleRequest};
use crate::storage::{CrudStorage, Storage};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@localhost";

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

async fn build_cache_backend(name: &str) -> Result<Arc<dyn ObjectCache>> {
    let constructor = get_object_cache_plugin(name).ok_or_else(|| {
        EduCenterError::cache_plugin_not_found(format!("Cache backend '{name}' not found in registry"))
    })?;
    let cache = constructor().await?;
    Ok(Arc::from(cache))
}

/// 创建缓存实例，配置的后端不可用时回退到内存缓存
pub async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let cache_type = AppConfig::get().cache.cache_type.as_str();
    warn!("Attempting to create {} cache backend", cache_type);

    match build_cache_backend(cache_type).await {
        Ok(cache) => {
            warn!("Successfully created {} cache backend", cache_type);
            Ok(cache)
        }
        Err(e) if cache_type != "moka" => {
            warn!("Failed to create {} cache: {}", cache_type, e);
            warn!("Falling back to memory cache");
            build_cache_backend("moka").await
        }
        Err(e) => Err(e),
    }
}

/// 生成随机密码
fn generate_random_password(length: usize) -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz23456789!@#$%";
    let mut rng = rand::rng();
    (0..length)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// 角色表为空时写入内置角色
pub async fn seed_roles(storage: &dyn Storage) -> Result<()> {
    let count = storage.count_user_roles().await?;
    if count > 0 {
        debug!("Database already has {} role(s), skipping role seed", count);
        return Ok(());
    }

    for role_name in BUILTIN_ROLES {
        let role = <dyn Storage as CrudStorage<UserRole>>::create_record(
            storage,
            CreateUserRoleRequest {
                role_name: role_name.to_string(),
            },
        )
        .await?;
        info!("Seeded role '{}' (ID: {})", role.role_name, role.id);
    }
    Ok(())
}

/// 用户表为空时创建默认管理员
pub async fn seed_admin(storage: &dyn Storage) -> Result<()> {
    let count = storage.count_users().await?;
    if count > 0 {
        debug!("Database already has {} user(s), skipping admin seed", count);
        return Ok(());
    }
    info!("No users found in database, creating default admin account...");

    let role = storage
        .get_user_role_by_name(BUILTIN_ROLES[0])
        .await?
        .ok_or_else(|| EduCenterError::not_found("Role 'admin' is missing, cannot seed admin"))?;

    // 优先使用环境变量，否则生成随机密码
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
        let pwd = generate_random_password(16);
        warn!("==========================================================");
        warn!("  ADMIN PASSWORD NOT SET - USING GENERATED PASSWORD");
        warn!("  Generated admin password: {}", pwd);
        warn!("  Please save this password or set ADMIN_PASSWORD env var");
        warn!("==========================================================");
        pwd
    });

    let mut request = CreateUserRequest {
        email: DEFAULT_ADMIN_EMAIL.to_string(),
        password,
        name: "Administrator".to_string(),
        work_education_center_id: None,
        user_role_id: role.id,
        profile_image: None,
    };
    User::prepare_create(&mut request)?;

    let user = <dyn Storage as CrudStorage<User>>::create_record(storage, request).await?;
    info!(
        "Default admin account created (ID: {}, email: {})",
        user.id, user.email
    );
    Ok(())
}

/// 准备服务器启动的上下文：存储、迁移、初始数据与缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }

    crate::cache::register_builtin_plugins();
    if cfg!(debug_assertions) {
        crate::cache::register::debug_object_cache_registry();
    }

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed_roles(storage.as_ref()).await?;
    if let Err(e) = seed_admin(storage.as_ref()).await {
        warn!("Failed to seed admin account: {}", e);
    }

    let cache = create_cache().await?;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_password_length() {
        let pwd = generate_random_password(16);
        assert_eq!(pwd.chars().count(), 16);
        assert_ne!(pwd, generate_random_password(16));
    }
}
