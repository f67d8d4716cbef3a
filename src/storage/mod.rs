//! 存储层
//!
//! [`CrudStorage`] 描述单一资源的五个基本操作，[`Storage`] 汇总所有资源
//! 以及认证、关联查询所需的少量专用方法。服务层只依赖 `Arc<dyn Storage>`。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::{
    PageWindow, Resource,
    billing::entities::{Contract, Payment},
    centers::entities::{Announcement, Branch, EducationCenter},
    courses::entities::{Course, CourseTag, CourseTagMapping, Enrollment},
    engagement::entities::{Faq, Notification, Review, SearchHistory},
    geography::entities::{City, District, Subdistrict},
    users::entities::{User, UserRole, Worker},
};

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait CrudStorage<R: Resource>: Send + Sync {
    /// 按 id 升序列出记录；`window` 为 `None` 时返回全部
    async fn list_records(&self, filter: R::Filter, window: Option<PageWindow>) -> Result<Vec<R>>;
    async fn get_record(&self, id: i64) -> Result<Option<R>>;
    async fn create_record(&self, req: R::Create) -> Result<R>;
    /// 记录不存在时返回 `Ok(None)`
    async fn update_record(&self, id: i64, req: R::Update) -> Result<Option<R>>;
    /// 记录不存在时返回 `Ok(false)`
    async fn delete_record(&self, id: i64) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait Storage:
    CrudStorage<Announcement>
    + CrudStorage<Branch>
    + CrudStorage<City>
    + CrudStorage<Contract>
    + CrudStorage<Course>
    + CrudStorage<CourseTag>
    + CrudStorage<CourseTagMapping>
    + CrudStorage<District>
    + CrudStorage<EducationCenter>
    + CrudStorage<Enrollment>
    + CrudStorage<Faq>
    + CrudStorage<Notification>
    + CrudStorage<Payment>
    + CrudStorage<Review>
    + CrudStorage<SearchHistory>
    + CrudStorage<Subdistrict>
    + CrudStorage<User>
    + CrudStorage<UserRole>
    + CrudStorage<Worker>
    + Send
    + Sync
{
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;
    // 通过角色名获取角色
    async fn get_user_role_by_name(&self, name: &str) -> Result<Option<UserRole>>;
    // 统计角色数量
    async fn count_user_roles(&self) -> Result<u64>;
    /// 课程的全部标签；课程不存在时返回 `None`
    async fn list_course_tags_for_course(&self, course_id: i64) -> Result<Option<Vec<CourseTag>>>;
    /// 用户选修的全部课程；用户不存在时返回 `None`
    async fn list_courses_for_user(&self, user_id: i64) -> Result<Option<Vec<Course>>>;
}

/// 根据配置创建存储实例并执行迁移
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
