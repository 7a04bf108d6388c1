//! 测验作答记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_attempts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    pub score: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub auto_submitted: bool,
    pub attempted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_attempt(self) -> crate::models::quizzes::entities::QuizAttempt {
        use chrono::{DateTime, Utc};

        crate::models::quizzes::entities::QuizAttempt {
            id: self.id,
            quiz_id: self.quiz_id,
            student_id: self.student_id,
            score: self.score,
            correct_answers: self.correct_answers,
            total_questions: self.total_questions,
            auto_submitted: self.auto_submitted,
            attempted_at: DateTime::<Utc>::from_timestamp(self.attempted_at, 0)
                .unwrap_or_default(),
        }
    }
}
