use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Quiz {
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub duration_minutes: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 测验题目（含正确答案，仅服务端使用）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: i64,
    pub quiz_id: i64,
    pub position: i32,
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: i32,
}

/// 下发给学生的题目，不含正确答案
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizQuestionView {
    pub id: i64,
    pub position: i32,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&QuizQuestion> for QuizQuestionView {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            id: q.id,
            position: q.position,
            question: q.question.clone(),
            options: q.options.clone(),
        }
    }
}

// 测验作答记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub student_id: i64,
    pub score: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub auto_submitted: bool,
    pub attempted_at: chrono::DateTime<chrono::Utc>,
}

/// 新作答记录
#[derive(Debug, Clone)]
pub struct NewQuizAttempt {
    pub quiz_id: i64,
    pub student_id: i64,
    pub score: i32,
    pub correct_answers: i32,
    pub total_questions: i32,
    pub auto_submitted: bool,
}

/// 平均测验得分，无记录时为 0
pub fn average_score(attempts: &[QuizAttempt]) -> f64 {
    if attempts.is_empty() {
        return 0.0;
    }
    attempts.iter().map(|a| f64::from(a.score)).sum::<f64>() / attempts.len() as f64
}
