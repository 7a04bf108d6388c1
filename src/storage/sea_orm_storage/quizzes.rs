//! 测验、题目与作答记录

use super::SeaOrmStorage;
use crate::entity::quiz_attempts::{
    ActiveModel as AttemptActiveModel, Column as AttemptColumn, Entity as QuizAttempts,
};
use crate::entity::quiz_questions::{Column as QuestionColumn, Entity as QuizQuestions};
use crate::entity::quizzes::{Column as QuizColumn, Entity as Quizzes};
use crate::errors::{PortalError, Result};
use crate::models::quizzes::entities::{NewQuizAttempt, Quiz, QuizAttempt, QuizQuestion};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 课程下的测验
    pub async fn list_quizzes_impl(&self, course_code: &str) -> Result<Vec<Quiz>> {
        let rows = Quizzes::find()
            .filter(QuizColumn::CourseCode.eq(course_code))
            .order_by_asc(QuizColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验列表失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_quiz()).collect())
    }

    /// 通过 ID 获取测验
    pub async fn get_quiz_by_id_impl(&self, id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 测验题目（按顺序）
    pub async fn list_quiz_questions_impl(&self, quiz_id: i64) -> Result<Vec<QuizQuestion>> {
        let rows = QuizQuestions::find()
            .filter(QuestionColumn::QuizId.eq(quiz_id))
            .order_by_asc(QuestionColumn::Position)
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询测验题目失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_question()).collect())
    }

    /// 写入作答记录
    pub async fn create_quiz_attempt_impl(&self, attempt: NewQuizAttempt) -> Result<QuizAttempt> {
        let model = AttemptActiveModel {
            quiz_id: Set(attempt.quiz_id),
            student_id: Set(attempt.student_id),
            score: Set(attempt.score),
            correct_answers: Set(attempt.correct_answers),
            total_questions: Set(attempt.total_questions),
            auto_submitted: Set(attempt.auto_submitted),
            attempted_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建作答记录失败: {e}")))?;

        Ok(result.into_attempt())
    }

    /// 学生作答记录（最新在前）
    pub async fn list_quiz_attempts_impl(&self, student_id: i64) -> Result<Vec<QuizAttempt>> {
        let rows = QuizAttempts::find()
            .filter(AttemptColumn::StudentId.eq(student_id))
            .order_by_desc(AttemptColumn::AttemptedAt)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询作答记录失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_attempt()).collect())
    }
}
