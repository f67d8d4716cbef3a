use super::{SeaOrmStorage, contains_pattern, map_db_err, search_term};
use crate::entity::{courses, user_roles, users};
use crate::errors::Result;
use crate::impl_crud_storage;
use crate::models::{
    PageWindow,
    courses::entities::Course,
    users::{
        entities::{User, UserRole, Worker},
        requests::{
            CreateUserRequest, CreateUserRoleRequest, CreateWorkerRequest, UpdateUserRequest,
            UpdateUserRoleRequest, UserFilter, UserRoleFilter, WorkerFilter,
        },
    },
};
use crate::storage::CrudStorage;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, ModelTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
};

// 角色
fn build_user_role(req: CreateUserRoleRequest, now: i64) -> user_roles::ActiveModel {
    user_roles::ActiveModel {
        role_name: Set(req.role_name),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_user_role(model: &mut user_roles::ActiveModel, req: UpdateUserRoleRequest) {
    if let Some(role_name) = req.role_name {
        model.role_name = Set(role_name);
    }
}

fn filter_user_roles(
    mut select: Select<user_roles::Entity>,
    filter: UserRoleFilter,
) -> Select<user_roles::Entity> {
    if let Some(term) = search_term(filter.search) {
        select = select.filter(user_roles::Column::RoleName.like(contains_pattern(&term)));
    }
    select
}

impl_crud_storage! {
    record: UserRole,
    entity: user_roles,
    convert: into_user_role,
    build: build_user_role,
    patch: patch_user_role,
    filter: filter_user_roles,
}

// 用户；password 字段此时已是哈希
fn build_user(req: CreateUserRequest, now: i64) -> users::ActiveModel {
    users::ActiveModel {
        email: Set(req.email),
        password_hash: Set(req.password),
        name: Set(req.name),
        work_education_center_id: Set(req.work_education_center_id),
        user_role_id: Set(req.user_role_id),
        profile_image: Set(req.profile_image),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    }
}

fn patch_user(model: &mut users::ActiveModel, req: UpdateUserRequest) {
    if let Some(email) = req.email {
        model.email = Set(email);
    }
    if let Some(password) = req.password {
        model.password_hash = Set(password);
    }
    if let Some(name) = req.name {
        model.name = Set(name);
    }
    if let Some(work_education_center_id) = req.work_education_center_id {
        model.work_education_center_id = Set(Some(work_education_center_id));
    }
    if let Some(user_role_id) = req.user_role_id {
        model.user_role_id = Set(user_role_id);
    }
    if let Some(profile_image) = req.profile_image {
        model.profile_image = Set(Some(profile_image));
    }
}

fn search_users(select: Select<users::Entity>, search: Option<String>) -> Select<users::Entity> {
    match search_term(search) {
        Some(term) => select.filter(
            Condition::any()
                .add(users::Column::Name.like(contains_pattern(&term)))
                .add(users::Column::Email.like(contains_pattern(&term))),
        ),
        None => select,
    }
}

fn filter_users(mut select: Select<users::Entity>, filter: UserFilter) -> Select<users::Entity> {
    if let Some(user_role_id) = filter.user_role_id {
        select = select.filter(users::Column::UserRoleId.eq(user_role_id));
    }
    if let Some(center_id) = filter.work_education_center_id {
        select = select.filter(users::Column::WorkEducationCenterId.eq(center_id));
    }
    search_users(select, filter.search)
}

impl_crud_storage! {
    record: User,
    entity: users,
    convert: into_user,
    build: build_user,
    patch: patch_user,
    filter: filter_users,
}

// 员工：work_education_center_id 非空的用户
fn workers() -> Select<users::Entity> {
    users::Entity::find().filter(users::Column::WorkEducationCenterId.is_not_null())
}

#[async_trait]
impl CrudStorage<Worker> for SeaOrmStorage {
    async fn list_records(
        &self,
        filter: WorkerFilter,
        window: Option<PageWindow>,
    ) -> Result<Vec<Worker>> {
        let mut select = workers();
        if let Some(center_id) = filter.work_education_center_id {
            select = select.filter(users::Column::WorkEducationCenterId.eq(center_id));
        }
        select = search_users(select, filter.search).order_by_asc(users::Column::Id);
        if let Some(window) = window {
            select = select.offset(window.offset).limit(window.limit);
        }

        let models = select.all(&self.db).await.map_err(map_db_err)?;
        Ok(models
            .into_iter()
            .filter_map(|m| m.into_user().into_worker())
            .collect())
    }

    async fn get_record(&self, id: i64) -> Result<Option<Worker>> {
        let model = workers()
            .filter(users::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.and_then(|m| m.into_user().into_worker()))
    }

    async fn create_record(&self, req: CreateWorkerRequest) -> Result<Worker> {
        let now = chrono::Utc::now().timestamp();
        let model = build_user(CreateUserRequest::from(req), now)
            .insert(&self.db)
            .await
            .map_err(map_db_err)?;
        model.into_user().into_worker().ok_or_else(|| {
            crate::errors::EduCenterError::database_operation("Created worker has no workplace")
        })
    }

    async fn update_record(&self, id: i64, req: UpdateUserRequest) -> Result<Option<Worker>> {
        let Some(existing) = workers()
            .filter(users::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut model: users::ActiveModel = existing.into();
        patch_user(&mut model, req);
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model.update(&self.db).await.map_err(map_db_err)?;
        Ok(updated.into_user().into_worker())
    }

    async fn delete_record(&self, id: i64) -> Result<bool> {
        let result = users::Entity::delete_many()
            .filter(users::Column::Id.eq(id))
            .filter(users::Column::WorkEducationCenterId.is_not_null())
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(result.rows_affected > 0)
    }
}

impl SeaOrmStorage {
    /// 通过邮箱获取用户
    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        users::Entity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    pub async fn get_user_role_by_name_impl(&self, name: &str) -> Result<Option<UserRole>> {
        let result = user_roles::Entity::find()
            .filter(user_roles::Column::RoleName.eq(name))
            .order_by_asc(user_roles::Column::Id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into_user_role()))
    }

    pub async fn count_user_roles_impl(&self) -> Result<u64> {
        user_roles::Entity::find()
            .count(&self.db)
            .await
            .map_err(map_db_err)
    }

    /// 用户选修的全部课程（多对多，经由 enrollments）
    pub async fn list_courses_for_user_impl(&self, user_id: i64) -> Result<Option<Vec<Course>>> {
        let Some(user) = users::Entity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let courses = user
            .find_related(courses::Entity)
            .order_by_asc(courses::Column::Id)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(Some(courses.into_iter().map(|m| m.into_course()).collect()))
    }
}
