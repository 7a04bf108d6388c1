//! 进行中的测验会话
//!
//! 会话以 (学生, 测验) 为键保存在 `DashMap` 中，每个会话有一个每秒触发的计时任务。
//! 手动提交与超时自动提交都先从表中移除会话，移除成功的一方负责写入作答记录，
//! 因此每个会话至多提交一次。会话不持久化，进程重启后进行中的作答丢失。

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use async_trait::async_trait;
use dashmap::{DashMap, mapref::entry::Entry};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use super::engine::{AnswerError, QuizSession};
use crate::errors::{PortalError, Result};
use crate::models::quizzes::{
    entities::{NewQuizAttempt, QuizAttempt},
    requests::NavigateDirection,
    responses::QuizSessionResponse,
};
use crate::storage::Storage;

/// (student_id, quiz_id)
pub type SessionKey = (i64, i64);

/// 作答记录的写入端
#[async_trait]
pub trait AttemptStore: Send + Sync {
    async fn save_attempt(&self, attempt: NewQuizAttempt) -> Result<QuizAttempt>;
}

struct StorageAttemptStore(Arc<dyn Storage>);

#[async_trait]
impl AttemptStore for StorageAttemptStore {
    async fn save_attempt(&self, attempt: NewQuizAttempt) -> Result<QuizAttempt> {
        self.0.create_quiz_attempt(attempt).await
    }
}

#[derive(Debug)]
pub enum QuizSessionError {
    NotFound,
    LimitReached,
    InvalidAnswer(AnswerError),
    Storage(PortalError),
}

struct ActiveSession {
    state: Arc<Mutex<QuizSession>>,
    timer: JoinHandle<()>,
}

fn lock(state: &Mutex<QuizSession>) -> MutexGuard<'_, QuizSession> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct QuizSessionRegistry {
    sessions: DashMap<SessionKey, ActiveSession>,
    store: Arc<dyn AttemptStore>,
    max_sessions: usize,
}

impl QuizSessionRegistry {
    pub fn new(store: Arc<dyn AttemptStore>, max_sessions: usize) -> Arc<Self> {
        Arc::new(Self {
            sessions: DashMap::new(),
            store,
            max_sessions,
        })
    }

    pub fn with_storage(storage: Arc<dyn Storage>, max_sessions: usize) -> Arc<Self> {
        Self::new(Arc::new(StorageAttemptStore(storage)), max_sessions)
    }

    pub fn active_count(&self) -> usize {
        self.sessions.len()
    }

    pub fn snapshot(&self, key: SessionKey) -> Option<QuizSessionResponse> {
        self.sessions
            .get(&key)
            .map(|active| lock(&active.state).snapshot())
    }

    /// 开始会话；同一键已有会话时直接返回它
    pub fn start(
        self: &Arc<Self>,
        key: SessionKey,
        session: QuizSession,
    ) -> std::result::Result<QuizSessionResponse, QuizSessionError> {
        if let Some(existing) = self.snapshot(key) {
            return Ok(existing);
        }
        if self.sessions.len() >= self.max_sessions {
            return Err(QuizSessionError::LimitReached);
        }

        let snapshot = session.snapshot();
        let state = Arc::new(Mutex::new(session));
        let timer = self.spawn_timer(key, Arc::clone(&state));

        match self.sessions.entry(key) {
            // 并发的另一次 start 已经插入
            Entry::Occupied(existing) => {
                timer.abort();
                Ok(lock(&existing.get().state).snapshot())
            }
            Entry::Vacant(slot) => {
                slot.insert(ActiveSession { state, timer });
                info!("Quiz session started: student {} quiz {}", key.0, key.1);
                Ok(snapshot)
            }
        }
    }

    pub fn answer(
        &self,
        key: SessionKey,
        question_id: i64,
        option: i32,
    ) -> std::result::Result<QuizSessionResponse, QuizSessionError> {
        let active = self.sessions.get(&key).ok_or(QuizSessionError::NotFound)?;
        let mut session = lock(&active.state);
        session
            .answer(question_id, option)
            .map_err(QuizSessionError::InvalidAnswer)?;
        Ok(session.snapshot())
    }

    pub fn navigate(
        &self,
        key: SessionKey,
        direction: NavigateDirection,
    ) -> std::result::Result<QuizSessionResponse, QuizSessionError> {
        let active = self.sessions.get(&key).ok_or(QuizSessionError::NotFound)?;
        let mut session = lock(&active.state);
        session.navigate(direction);
        Ok(session.snapshot())
    }

    /// 手动提交：移除会话、停止计时并写入作答记录
    pub async fn submit(&self, key: SessionKey) -> std::result::Result<QuizAttempt, QuizSessionError> {
        let (_, active) = self
            .sessions
            .remove(&key)
            .ok_or(QuizSessionError::NotFound)?;
        active.timer.abort();

        let attempt = lock(&active.state).to_attempt(false);
        self.store
            .save_attempt(attempt)
            .await
            .map_err(QuizSessionError::Storage)
    }

    /// 停止所有计时任务，未提交的会话直接丢弃
    pub fn shutdown(&self) {
        let count = self.sessions.len();
        for entry in self.sessions.iter() {
            entry.timer.abort();
        }
        self.sessions.clear();
        if count > 0 {
            warn!("Discarded {} in-progress quiz sessions", count);
        }
    }

    fn spawn_timer(self: &Arc<Self>, key: SessionKey, state: Arc<Mutex<QuizSession>>) -> JoinHandle<()> {
        let registry: Weak<Self> = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(1));
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // 第一次 tick 立即完成
            interval.tick().await;

            loop {
                interval.tick().await;
                if lock(&state).tick() == 0 {
                    break;
                }
            }

            if let Some(registry) = registry.upgrade() {
                registry.auto_submit(key, &state).await;
            }
        })
    }

    async fn auto_submit(&self, key: SessionKey, state: &Arc<Mutex<QuizSession>>) {
        // 只移除属于本计时任务的会话
        let removed = self
            .sessions
            .remove_if(&key, |_, active| Arc::ptr_eq(&active.state, state));
        if removed.is_none() {
            return;
        }

        let attempt = lock(state).to_attempt(true);
        match self.store.save_attempt(attempt).await {
            Ok(saved) => info!(
                "Quiz auto-submitted: student {} quiz {} score {}",
                key.0, key.1, saved.score
            ),
            Err(e) => error!(
                "Failed to save auto-submitted quiz for student {} quiz {}: {}",
                key.0, key.1, e
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::quizzes::engine::tests::{questions, quiz};

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<NewQuizAttempt>>,
    }

    impl MemoryStore {
        fn saved(&self) -> Vec<NewQuizAttempt> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AttemptStore for MemoryStore {
        async fn save_attempt(&self, attempt: NewQuizAttempt) -> Result<QuizAttempt> {
            self.saved.lock().unwrap().push(attempt.clone());
            Ok(QuizAttempt {
                id: self.saved.lock().unwrap().len() as i64,
                quiz_id: attempt.quiz_id,
                student_id: attempt.student_id,
                score: attempt.score,
                correct_answers: attempt.correct_answers,
                total_questions: attempt.total_questions,
                auto_submitted: attempt.auto_submitted,
                attempted_at: chrono::Utc::now(),
            })
        }
    }

    fn registry(max: usize) -> (Arc<QuizSessionRegistry>, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::default());
        (QuizSessionRegistry::new(store.clone(), max), store)
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_is_idempotent() {
        let (registry, _) = registry(10);
        let key = (1, 9);

        registry
            .start(key, QuizSession::new(&quiz(5), 1, questions(3)))
            .unwrap();
        registry.navigate(key, NavigateDirection::Next).unwrap();

        let again = registry
            .start(key, QuizSession::new(&quiz(5), 1, questions(3)))
            .unwrap();
        assert_eq!(again.current_index, 1);
        assert_eq!(registry.active_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_limit_reached() {
        let (registry, _) = registry(1);
        registry
            .start((1, 9), QuizSession::new(&quiz(5), 1, questions(1)))
            .unwrap();
        let result = registry.start((2, 9), QuizSession::new(&quiz(5), 2, questions(1)));
        assert!(matches!(result, Err(QuizSessionError::LimitReached)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_manual_submit_stops_timer() {
        let (registry, store) = registry(10);
        let key = (1, 9);
        registry
            .start(key, QuizSession::new(&quiz(1), 1, questions(2)))
            .unwrap();
        registry.answer(key, 1, 1).unwrap();

        let attempt = registry.submit(key).await.unwrap();
        assert_eq!(attempt.score, 50);
        assert!(!attempt.auto_submitted);

        // 计时已停止，超时后不会再写入
        tokio::time::sleep(Duration::from_secs(120)).await;
        assert_eq!(store.saved().len(), 1);
        assert!(matches!(
            registry.submit(key).await,
            Err(QuizSessionError::NotFound)
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_auto_submits() {
        let (registry, store) = registry(10);
        let key = (1, 9);
        registry
            .start(key, QuizSession::new(&quiz(1), 1, questions(4)))
            .unwrap();
        registry.answer(key, 2, 2).unwrap();

        tokio::time::sleep(Duration::from_secs(30)).await;
        let remaining = registry.snapshot(key).unwrap().remaining_seconds;
        assert!((29..=31).contains(&remaining));

        tokio::time::sleep(Duration::from_secs(35)).await;
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }

        assert!(registry.snapshot(key).is_none());
        let saved = store.saved();
        assert_eq!(saved.len(), 1);
        assert!(saved[0].auto_submitted);
        assert_eq!(saved[0].score, 25);
        assert_eq!(saved[0].total_questions, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_answer_keeps_session() {
        let (registry, _) = registry(10);
        let key = (1, 9);
        registry
            .start(key, QuizSession::new(&quiz(5), 1, questions(2)))
            .unwrap();
        assert!(matches!(
            registry.answer(key, 1, 7),
            Err(QuizSessionError::InvalidAnswer(AnswerError::OptionOutOfRange))
        ));
        assert!(registry.snapshot(key).unwrap().answers.is_empty());
        assert!(matches!(
            registry.answer((5, 5), 1, 0),
            Err(QuizSessionError::NotFound)
        ));
    }
}
