//! 测验题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quiz_questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quiz_id: i64,
    pub position: i32,
    #[sea_orm(column_type = "Text")]
    pub question: String,
    /// JSON 字符串数组
    #[sea_orm(column_type = "Text")]
    pub options: String,
    pub correct_option: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_question(self) -> crate::models::quizzes::entities::QuizQuestion {
        crate::models::quizzes::entities::QuizQuestion {
            id: self.id,
            quiz_id: self.quiz_id,
            position: self.position,
            question: self.question,
            options: serde_json::from_str(&self.options).unwrap_or_default(),
            correct_option: self.correct_option,
        }
    }
}
