//! 分校实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "branches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub education_center_id: i64,
    pub name: String,
    pub subdistrict_id: Option<i64>,
    #[sea_orm(column_type = "Text", nullable)]
    pub other_description: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: Option<String>,
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
    #[sea_orm(
        belongs_to = "super::subdistricts::Entity",
        from = "Column::SubdistrictId",
        to = "super::subdistricts::Column::Id"
    )]
    Subdistrict,
}

impl Related<super::education_centers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EducationCenter.def()
    }
}

impl Related<super::subdistricts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Subdistrict.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_branch(self) -> crate::models::centers::entities::Branch {
        use crate::entity::timestamp;
        use crate::models::centers::entities::Branch;

        Branch {
            id: self.id,
            education_center_id: self.education_center_id,
            name: self.name,
            subdistrict_id: self.subdistrict_id,
            other_description: self.other_description,
            latitude: self.latitude,
            longitude: self.longitude,
            image: self.image,
            created_at: timestamp(self.created_at),
            updated_at: timestamp(self.updated_at),
        }
    }
}
