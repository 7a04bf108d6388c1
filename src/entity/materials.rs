//! 课程资料实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "materials")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub material_type: String,
    pub url: String,
    pub week_number: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_material(self) -> crate::models::courses::entities::Material {
        use crate::models::courses::entities::{Material, MaterialType};
        use chrono::{DateTime, Utc};

        Material {
            id: self.id,
            course_code: self.course_code,
            title: self.title,
            material_type: self
                .material_type
                .parse::<MaterialType>()
                .unwrap_or(MaterialType::Link),
            url: self.url,
            week_number: self.week_number,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
