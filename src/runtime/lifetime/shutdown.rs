use std::sync::Arc;

use tokio::signal;
use tracing::{error, warn};

use crate::services::quizzes::QuizSessionRegistry;

pub async fn listen_for_shutdown() {
    // 等待 Ctrl+C 信号
    if let Err(e) = signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    warn!("Shutdown signal received, initiating graceful shutdown...");
}

/// 停止测验计时任务
pub fn release_resources(quiz_sessions: &Arc<QuizSessionRegistry>) {
    quiz_sessions.shutdown();
    warn!("Quiz session timers stopped");
}
