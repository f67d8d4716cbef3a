//! 公告实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "announcements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub education_center_id: Option<i64>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::education_centers::Entity",
        from = "Column::EducationCenterId",
        to = "super::education_centers::Column::Id"
    )]
    EducationCenter,
}

impl Related<super::education_centers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EducationCenter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_announcement(self) -> crate::models::centers::entities::Announcement {
        use crate::entity::timestamp;
        use crate::models::centers::entities::Announcement;

        Announcement {
            id: self.id,
            education_center_id: self.education_center_id,
            title: self.title,
            content: self.content,
            created_at: timestamp(self.created_at),
            updated_at: timestamp(self.updated_at),
        }
    }
}
