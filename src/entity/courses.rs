//! 课程实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub branch_id: Option<i64>,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
    pub enrollment_start_date: Option<i64>,
    pub enrollment_end_date: Option<i64>,
    pub max_students: Option<i32>,
    pub current_students: i32,
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::branches::Entity",
        from = "Column::BranchId",
        to = "super::branches::Column::Id"
    )]
    Branch,
}

impl Related<super::branches::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Branch.def()
    }
}

// 课程 <-> 标签，经由 course_tag_mappings
impl Related<super::course_tags::Entity> for Entity {
    fn to() -> RelationDef {
        super::course_tag_mappings::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::course_tag_mappings::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
// 从数据库模型转换为业务模型
impl Model {
    pub fn into_course(self) -> crate::models::courses::entities::Course {
        use crate::entity::{optional_timestamp, timestamp};
        use crate::models::courses::entities::Course;

        Course {
            id: self.id,
            branch_id: self.branch_id,
            name: self.name,
            description: self.description,
            start_date: optional_timestamp(self.start_date),
            end_date: optional_timestamp(self.end_date),
            enrollment_start_date: optional_timestamp(self.enrollment_start_date),
            enrollment_end_date: optional_timestamp(self.enrollment_end_date),
            max_students: self.max_students,
            current_students: self.current_students,
            image: self.image,
            created_at: timestamp(self.created_at),
            updated_at: timestamp(self.updated_at),
        }
    }
}
