//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! 时间戳以 unix 秒存储，转换为业务实体时变为 `DateTime<Utc>`。

use chrono::{DateTime, Utc};

pub mod prelude;

pub mod announcements;
pub mod branches;
pub mod cities;
pub mod contracts;
pub mod course_tag_mappings;
pub mod course_tags;
pub mod courses;
pub mod districts;
pub mod education_centers;
pub mod enrollments;
pub mod faqs;
pub mod notifications;
pub mod payments;
pub mod reviews;
pub mod search_histories;
pub mod subdistricts;
pub mod user_roles;
pub mod users;

pub(crate) fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

pub(crate) fn optional_timestamp(secs: Option<i64>) -> Option<DateTime<Utc>> {
    secs.map(timestamp)
}
