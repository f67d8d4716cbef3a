//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 各资源的 [`CrudStorage`](crate::storage::CrudStorage) 实现由
//! [`impl_crud_storage!`] 生成，只需提供建模、补丁与过滤三个函数。

mod billing;
mod centers;
mod courses;
mod engagement;
mod geography;
mod users;

use crate::config::AppConfig;
use crate::errors::{EduCenterError, Result};
use crate::utils::escape_like_pattern;
use migration::{Migrator, MigratorTrait};
use sea_orm::sea_query::LikeExpr;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

/// 为一种资源生成 `CrudStorage` 实现
///
/// - `build(req, now) -> ActiveModel`：由创建请求构造新行
/// - `patch(&mut ActiveModel, req)`：把更新请求中给出的字段写入
/// - `filter(Select, filter) -> Select`：应用列表过滤条件
#[macro_export]
macro_rules! impl_crud_storage {
    (
        record: $record:ty,
        entity: $entity:ident,
        convert: $convert:ident,
        build: $build:ident,
        patch: $patch:ident,
        filter: $filter:ident $(,)?
    ) => {
        const _: () = {
            use $crate::entity::$entity::{ActiveModel, Column, Entity};
            use $crate::errors::Result;
            use $crate::models::{PageWindow, Resource};
            use $crate::storage::CrudStorage;
            use $crate::storage::sea_orm_storage::{SeaOrmStorage, map_db_err};
            use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, QuerySelect, Set};

            #[async_trait::async_trait]
            impl CrudStorage<$record> for SeaOrmStorage {
                async fn list_records(
                    &self,
                    filter: <$record as Resource>::Filter,
                    window: Option<PageWindow>,
                ) -> Result<Vec<$record>> {
                    let mut select = $filter(Entity::find(), filter).order_by_asc(Column::Id);
                    if let Some(window) = window {
                        select = select.offset(window.offset).limit(window.limit);
                    }
                    let models = select.all(&self.db).await.map_err(map_db_err)?;
                    Ok(models.into_iter().map(|m| m.$convert()).collect())
                }

                async fn get_record(&self, id: i64) -> Result<Option<$record>> {
                    let model = Entity::find_by_id(id)
                        .one(&self.db)
                        .await
                        .map_err(map_db_err)?;
                    Ok(model.map(|m| m.$convert()))
                }

                async fn create_record(
                    &self,
                    req: <$record as Resource>::Create,
                ) -> Result<$record> {
                    let now = chrono::Utc::now().timestamp();
                    let model = $build(req, now)
                        .insert(&self.db)
                        .await
                        .map_err(map_db_err)?;
                    Ok(model.$convert())
                }

                async fn update_record(
                    &self,
                    id: i64,
                    req: <$record as Resource>::Update,
                ) -> Result<Option<$record>> {
                    let Some(existing) = Entity::find_by_id(id)
                        .one(&self.db)
                        .await
                        .map_err(map_db_err)?
                    else {
                        return Ok(None);
                    };

                    let mut model: ActiveModel = existing.into();
                    $patch(&mut model, req);
                    model.updated_at = Set(chrono::Utc::now().timestamp());

                    let updated = model.update(&self.db).await.map_err(map_db_err)?;
                    Ok(Some(updated.$convert()))
                }

                async fn delete_record(&self, id: i64) -> Result<bool> {
                    let result = Entity::delete_by_id(id)
                        .exec(&self.db)
                        .await
                        .map_err(map_db_err)?;
                    Ok(result.rows_affected > 0)
                }
            }
        };
    };
}

/// 唯一约束冲突映射为 Conflict，其余为数据库操作错误
pub(crate) fn map_db_err(err: DbErr) -> EduCenterError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            EduCenterError::conflict(format!("Duplicate value violates a unique constraint: {detail}"))
        }
        _ => EduCenterError::database_operation(err.to_string()),
    }
}

/// 去掉首尾空白；空字符串视为未提供
pub(crate) fn search_term(search: Option<String>) -> Option<String> {
    search
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// 构造 `%term%` 形式的 LIKE 表达式，通配符已转义
pub(crate) fn contains_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like_pattern(term))).escape('\\')
}

impl SeaOrmStorage {
    /// 按全局配置创建存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::connect(
            &config.database.url,
            config.database.pool_size,
            config.database.timeout,
        )
        .await
    }

    /// 连接数据库并运行迁移
    pub async fn connect(url: &str, pool_size: u32, timeout: u64) -> Result<Self> {
        let db_url = Self::build_database_url(url)?;

        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, pool_size, timeout).await?
        } else {
            Self::connect_generic(&db_url, pool_size, timeout).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| EduCenterError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化，外键约束开启）
    async fn connect_sqlite(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = url.contains(":memory:");
        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| EduCenterError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        // 内存库不支持 WAL
        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存库的每个连接都是独立的数据库，只能用单连接且不能回收
        let pool_size = if in_memory { 1 } else { pool_size.max(1) };
        let mut pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(timeout));
        if in_memory {
            pool = pool.idle_timeout(None).max_lifetime(None);
        } else {
            pool = pool.idle_timeout(Duration::from_secs(300));
        }

        let pool = pool
            .connect_with(opt)
            .await
            .map_err(|e| EduCenterError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, pool_size: u32, timeout: u64) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(pool_size)
            .min_connections(pool_size.min(5))
            .connect_timeout(Duration::from_secs(timeout))
            .acquire_timeout(Duration::from_secs(timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false);

        Database::connect(opt)
            .await
            .map_err(|e| EduCenterError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(EduCenterError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite:, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    courses::entities::{Course, CourseTag},
    users::entities::{User, UserRole},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn get_user_role_by_name(&self, name: &str) -> Result<Option<UserRole>> {
        self.get_user_role_by_name_impl(name).await
    }

    async fn count_user_roles(&self) -> Result<u64> {
        self.count_user_roles_impl().await
    }

    async fn list_course_tags_for_course(&self, course_id: i64) -> Result<Option<Vec<CourseTag>>> {
        self.list_course_tags_for_course_impl(course_id).await
    }

    async fn list_courses_for_user(&self, user_id: i64) -> Result<Option<Vec<Course>>> {
        self.list_courses_for_user_impl(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_database_url() {
        assert_eq!(
            SeaOrmStorage::build_database_url("educenter.db").unwrap(),
            "sqlite://educenter.db?mode=rwc"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url("sqlite::memory:").unwrap(),
            "sqlite::memory:"
        );
        assert_eq!(
            SeaOrmStorage::build_database_url(":memory:").unwrap(),
            "sqlite::memory:"
        );
        assert!(SeaOrmStorage::build_database_url("postgres://u:p@localhost/edu").is_ok());
        assert!(SeaOrmStorage::build_database_url("ftp://nowhere").is_err());
    }

    #[test]
    fn test_search_term() {
        assert_eq!(search_term(Some("  math ".into())), Some("math".into()));
        assert_eq!(search_term(Some("   ".into())), None);
        assert_eq!(search_term(None), None);
    }
}
