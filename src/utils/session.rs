//! 基于对象缓存的会话存储
//!
//! 会话 ID 为随机 UUID，缓存中以 `session:{sid}` 为键保存用户 ID。

use actix_web::cookie::{Cookie, SameSite, time::Duration};

use crate::cache::{CacheResult, ObjectCache};

const SESSION_PREFIX: &str = "session:";

pub fn session_key(sid: &str) -> String {
    format!("{SESSION_PREFIX}{sid}")
}

/// 为用户开启新会话，返回会话 ID
pub async fn create_session(cache: &dyn ObjectCache, user_id: i64, ttl: u64) -> String {
    let sid = uuid::Uuid::new_v4().simple().to_string();
    cache
        .insert_raw(session_key(&sid), user_id.to_string(), ttl)
        .await;
    sid
}

/// 解析会话对应的用户 ID；会话不存在或值损坏时返回 None
pub async fn resolve_session(cache: &dyn ObjectCache, sid: &str) -> Option<i64> {
    if sid.is_empty() {
        return None;
    }
    match cache.get_raw(&session_key(sid)).await {
        CacheResult::Found(value) => value.parse().ok(),
        CacheResult::NotFound => None,
        CacheResult::ExistsButNoValue => {
            tracing::warn!("Session lookup failed for a cached key");
            None
        }
    }
}

pub async fn destroy_session(cache: &dyn ObjectCache, sid: &str) {
    cache.remove(&session_key(sid)).await;
}

pub fn session_cookie(name: &str, sid: String, ttl: u64, secure: bool) -> Cookie<'static> {
    Cookie::build(name.to_owned(), sid)
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(ttl.min(i64::MAX as u64) as i64))
        .finish()
}

/// 使浏览器删除会话 Cookie
pub fn removal_cookie(name: &str, secure: bool) -> Cookie<'static> {
    let mut cookie = session_cookie(name, String::new(), 0, secure);
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;

    #[actix_web::test]
    async fn test_session_lifecycle() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        let sid = create_session(&cache, 42, 60).await;

        assert_eq!(resolve_session(&cache, &sid).await, Some(42));

        destroy_session(&cache, &sid).await;
        assert_eq!(resolve_session(&cache, &sid).await, None);
    }

    #[actix_web::test]
    async fn test_unknown_and_empty_sid() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        assert_eq!(resolve_session(&cache, "").await, None);
        assert_eq!(resolve_session(&cache, "missing").await, None);
    }

    #[actix_web::test]
    async fn test_corrupted_value_is_ignored() {
        let cache = MokaCacheWrapper::with_settings(100, 60);
        cache
            .insert_raw(session_key("bad"), "not-a-number".into(), 60)
            .await;
        assert_eq!(resolve_session(&cache, "bad").await, None);
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie("sid", "abc".into(), 3600, true);
        assert_eq!(cookie.name(), "sid");
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(3600)));

        let removal = removal_cookie("sid", false);
        assert_eq!(removal.value(), "");
        assert_eq!(removal.max_age(), Some(Duration::ZERO));
    }
}
