//! 教师实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "teachers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub staff_id: String,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_teacher(self) -> crate::models::teachers::entities::Teacher {
        use chrono::{DateTime, Utc};

        crate::models::teachers::entities::Teacher {
            id: self.id,
            staff_id: self.staff_id,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            department: self.department,
            designation: self.designation,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
