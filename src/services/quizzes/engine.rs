//! 测验会话状态
//!
//! 纯内存状态机：翻题、作答、倒计时和评分。计时任务与持久化在 `registry` 中。

use std::collections::HashMap;

use crate::models::quizzes::{
    entities::{NewQuizAttempt, Quiz, QuizQuestion, QuizQuestionView},
    requests::NavigateDirection,
    responses::QuizSessionResponse,
};

/// 得分 = round(100 × correct / total)，total 为 0 时得 0 分
pub fn score(correct: usize, total: usize) -> i32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as i32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizGrade {
    pub correct: usize,
    pub total: usize,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    UnknownQuestion,
    OptionOutOfRange,
}

impl AnswerError {
    pub fn message(&self) -> &'static str {
        match self {
            AnswerError::UnknownQuestion => "Question does not belong to this quiz",
            AnswerError::OptionOutOfRange => "Selected option is out of range",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    quiz_id: i64,
    student_id: i64,
    title: String,
    questions: Vec<QuizQuestion>,
    current_index: usize,
    answers: HashMap<i64, i32>,
    remaining_seconds: u64,
}

impl QuizSession {
    pub fn new(quiz: &Quiz, student_id: i64, mut questions: Vec<QuizQuestion>) -> Self {
        questions.sort_by_key(|q| (q.position, q.id));
        Self {
            quiz_id: quiz.id,
            student_id,
            title: quiz.title.clone(),
            questions,
            current_index: 0,
            answers: HashMap::new(),
            remaining_seconds: u64::try_from(quiz.duration_minutes.max(0)).unwrap_or(0) * 60,
        }
    }

    pub fn quiz_id(&self) -> i64 {
        self.quiz_id
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// 翻题，下标限制在 [0, total-1]
    pub fn navigate(&mut self, direction: NavigateDirection) -> usize {
        let last = self.questions.len().saturating_sub(1);
        self.current_index = match direction {
            NavigateDirection::Next => (self.current_index + 1).min(last),
            NavigateDirection::Previous => self.current_index.saturating_sub(1),
        };
        self.current_index
    }

    /// 记录答案，同一题重复作答时覆盖
    pub fn answer(&mut self, question_id: i64, option: i32) -> Result<(), AnswerError> {
        let question = self
            .questions
            .iter()
            .find(|q| q.id == question_id)
            .ok_or(AnswerError::UnknownQuestion)?;
        let in_range = usize::try_from(option).is_ok_and(|o| o < question.options.len());
        if !in_range {
            return Err(AnswerError::OptionOutOfRange);
        }
        self.answers.insert(question_id, option);
        Ok(())
    }

    /// 倒计时走一秒，返回剩余秒数
    pub fn tick(&mut self) -> u64 {
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        self.remaining_seconds
    }

    pub fn grade(&self) -> QuizGrade {
        let correct = self
            .questions
            .iter()
            .filter(|q| self.answers.get(&q.id) == Some(&q.correct_option))
            .count();
        let total = self.questions.len();
        QuizGrade {
            correct,
            total,
            score: score(correct, total),
        }
    }

    pub fn to_attempt(&self, auto_submitted: bool) -> NewQuizAttempt {
        let grade = self.grade();
        NewQuizAttempt {
            quiz_id: self.quiz_id,
            student_id: self.student_id,
            score: grade.score,
            correct_answers: i32::try_from(grade.correct).unwrap_or(i32::MAX),
            total_questions: i32::try_from(grade.total).unwrap_or(i32::MAX),
            auto_submitted,
        }
    }

    /// 下发给前端的快照，不含正确答案
    pub fn snapshot(&self) -> QuizSessionResponse {
        let questions: Vec<QuizQuestionView> =
            self.questions.iter().map(QuizQuestionView::from).collect();
        QuizSessionResponse {
            quiz_id: self.quiz_id,
            title: self.title.clone(),
            current_index: self.current_index,
            total_questions: questions.len(),
            remaining_seconds: self.remaining_seconds,
            answers: self.answers.clone(),
            current_question: questions.get(self.current_index).cloned(),
            questions,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn quiz(duration_minutes: i32) -> Quiz {
        Quiz {
            id: 9,
            course_code: "CS101".into(),
            title: "Unit 1".into(),
            duration_minutes,
            created_at: chrono::Utc::now(),
        }
    }

    pub(crate) fn questions(n: i64) -> Vec<QuizQuestion> {
        (1..=n)
            .map(|id| QuizQuestion {
                id,
                quiz_id: 9,
                position: id as i32,
                question: format!("Question {id}"),
                options: vec!["A".into(), "B".into(), "C".into(), "D".into()],
                correct_option: (id % 4) as i32,
            })
            .collect()
    }

    #[test]
    fn test_score_formula() {
        assert_eq!(score(0, 5), 0);
        assert_eq!(score(5, 5), 100);
        assert_eq!(score(0, 0), 0);
        assert_eq!(score(2, 3), 67);
        assert_eq!(score(1, 3), 33);
        assert_eq!(score(1, 8), 13);
    }

    #[test]
    fn test_score_matches_rounded_ratio() {
        for total in 1..=20usize {
            for correct in 0..=total {
                let expected = (100.0 * correct as f64 / total as f64).round() as i32;
                assert_eq!(score(correct, total), expected);
                assert!((0..=100).contains(&score(correct, total)));
            }
        }
    }

    #[test]
    fn test_grade_counts_correct_answers() {
        let mut session = QuizSession::new(&quiz(10), 1, questions(4));
        assert_eq!(session.grade().score, 0);

        // 题目 1..=4 的正确选项为 id % 4
        session.answer(1, 1).unwrap();
        session.answer(2, 2).unwrap();
        session.answer(3, 0).unwrap();
        let grade = session.grade();
        assert_eq!((grade.correct, grade.total, grade.score), (2, 4, 50));

        session.answer(3, 3).unwrap();
        session.answer(4, 0).unwrap();
        assert_eq!(session.grade().score, 100);
    }

    #[test]
    fn test_answer_validation() {
        let mut session = QuizSession::new(&quiz(10), 1, questions(2));
        assert_eq!(session.answer(99, 0), Err(AnswerError::UnknownQuestion));
        assert_eq!(session.answer(1, 4), Err(AnswerError::OptionOutOfRange));
        assert_eq!(session.answer(1, -1), Err(AnswerError::OptionOutOfRange));
        assert!(session.answer(1, 3).is_ok());
    }

    #[test]
    fn test_navigation_clamps() {
        let mut session = QuizSession::new(&quiz(10), 1, questions(3));
        assert_eq!(session.navigate(NavigateDirection::Previous), 0);
        assert_eq!(session.navigate(NavigateDirection::Next), 1);
        assert_eq!(session.navigate(NavigateDirection::Next), 2);
        assert_eq!(session.navigate(NavigateDirection::Next), 2);
        assert_eq!(session.navigate(NavigateDirection::Previous), 1);

        let mut empty = QuizSession::new(&quiz(10), 1, Vec::new());
        assert_eq!(empty.navigate(NavigateDirection::Next), 0);
    }

    #[test]
    fn test_tick_saturates() {
        let mut session = QuizSession::new(&quiz(1), 1, questions(1));
        assert_eq!(session.remaining_seconds(), 60);
        for _ in 0..59 {
            session.tick();
        }
        assert!(!session.is_expired());
        assert_eq!(session.tick(), 0);
        assert_eq!(session.tick(), 0);
        assert!(session.is_expired());
    }

    #[test]
    fn test_snapshot_hides_correct_option() {
        let mut session = QuizSession::new(&quiz(5), 1, questions(2));
        session.navigate(NavigateDirection::Next);
        let snapshot = session.snapshot();
        assert_eq!(snapshot.total_questions, 2);
        assert_eq!(snapshot.current_question.as_ref().map(|q| q.id), Some(2));

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(!json.contains("correct_option"));
    }

    #[test]
    fn test_questions_ordered_by_position() {
        let mut qs = questions(3);
        qs.reverse();
        let session = QuizSession::new(&quiz(5), 1, qs);
        let ids: Vec<i64> = session.snapshot().questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
