//! 测验实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub duration_minutes: i32,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_quiz(self) -> crate::models::quizzes::entities::Quiz {
        use chrono::{DateTime, Utc};

        crate::models::quizzes::entities::Quiz {
            id: self.id,
            course_code: self.course_code,
            title: self.title,
            duration_minutes: self.duration_minutes,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
