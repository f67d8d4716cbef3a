//! 对象缓存层
//!
//! 缓存后端以插件形式按名称注册（`moka` / `redis`），启动时根据
//! `cache.type` 选择。当前主要用作会话存储。

pub mod object_cache;
pub mod register;

use async_trait::async_trait;
use std::sync::Once;

/// 缓存查询结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    /// 后端出错，无法确定键是否存在
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// `ttl` 为秒，0 表示使用后端默认 TTL
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

/// 声明缓存插件，生成 `register_plugin()` 将构造器登记到注册表
#[macro_export]
macro_rules! declare_object_cache_plugin {
    ($name:literal, $ty:ty) => {
        pub fn register_plugin() {
            $crate::cache::register::register_object_cache_plugin(
                $name,
                std::sync::Arc::new(|| {
                    Box::pin(async {
                        let cache = <$ty>::new()
                            .map_err($crate::errors::EduCenterError::cache_connection)?;
                        Ok(Box::new(cache) as Box<dyn $crate::cache::ObjectCache>)
                    })
                }),
            );
        }
    };
}

static REGISTER_BUILTIN: Once = Once::new();

/// 注册内置缓存插件（可重复调用）
pub fn register_builtin_plugins() {
    REGISTER_BUILTIN.call_once(|| {
        object_cache::moka::register_plugin();
        object_cache::redis::register_plugin();
    });
}
