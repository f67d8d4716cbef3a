//! 用户实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub work_education_center_id: Option<i64>,
    pub user_role_id: i64,
    pub profile_image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::education_centers::Entity",
        from = "Column::WorkEducationCenterId",
        to = "super::education_centers::Column::Id"
    )]
    WorkEducationCenter,
    #[sea_orm(
        belongs_to = "super::user_roles::Entity",
        from = "Column::UserRoleId",
        to = "super::user_roles::Column::Id"
    )]
    UserRole,
}

impl Related<super::education_centers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkEducationCenter.def()
    }
}

impl Related<super::user_roles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRole.def()
    }
}

// 用户 <-> 课程，经由 enrollments
impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        super::enrollments::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::enrollments::Relation::User.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_user(self) -> crate::models::users::entities::User {
        use crate::entity::timestamp;
        use crate::models::users::entities::User;

        User {
            id: self.id,
            email: self.email,
            password_hash: self.password_hash,
            name: self.name,
            work_education_center_id: self.work_education_center_id,
            user_role_id: self.user_role_id,
            profile_image: self.profile_image,
            created_at: timestamp(self.created_at),
            updated_at: timestamp(self.updated_at),
        }
    }
}
