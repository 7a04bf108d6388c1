use std::collections::HashMap;

use serde::Serialize;
use ts_rs::TS;

use super::entities::{QuizAttempt, QuizQuestionView};

/// 进行中的测验会话快照
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizSessionResponse {
    pub quiz_id: i64,
    pub title: String,
    pub current_index: usize,
    pub total_questions: usize,
    pub remaining_seconds: u64,
    pub answers: HashMap<i64, i32>,
    pub current_question: Option<QuizQuestionView>,
    pub questions: Vec<QuizQuestionView>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizResultResponse {
    pub attempt: QuizAttempt,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttemptListResponse {
    pub items: Vec<QuizAttempt>,
    pub average_score: f64,
}
