//! 学习时长实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "activity_logs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_code: Option<String>,
    pub activity_type: String,
    pub duration_seconds: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_activity(self) -> crate::models::activity::entities::ActivityLog {
        use chrono::{DateTime, Utc};

        crate::models::activity::entities::ActivityLog {
            id: self.id,
            student_id: self.student_id,
            course_code: self.course_code,
            activity_type: self.activity_type,
            duration_seconds: self.duration_seconds,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
