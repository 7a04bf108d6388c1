//! 学生实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub reg_no: String,
    pub password_hash: String,
    pub name: String,
    pub email: String,
    pub aadhar: Option<String>,
    pub degree: Option<String>,
    pub batch: Option<String>,
    pub section: Option<String>,
    pub faculty_advisor: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub community: Option<String>,
    pub caste: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub cgpa: f64,
    pub earned_credits: i32,
    pub arrears: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_student(self) -> crate::models::students::entities::Student {
        use chrono::{DateTime, Utc};

        crate::models::students::entities::Student {
            id: self.id,
            reg_no: self.reg_no,
            name: self.name,
            email: self.email,
            password_hash: self.password_hash,
            aadhar: self.aadhar,
            degree: self.degree,
            batch: self.batch,
            section: self.section,
            faculty_advisor: self.faculty_advisor,
            dob: self.dob,
            gender: self.gender,
            nationality: self.nationality,
            religion: self.religion,
            community: self.community,
            caste: self.caste,
            address: self.address,
            cgpa: self.cgpa,
            earned_credits: self.earned_credits,
            arrears: self.arrears,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
