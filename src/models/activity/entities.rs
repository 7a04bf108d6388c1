use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学习时长记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct ActivityLog {
    pub id: i64,
    pub student_id: i64,
    pub course_code: Option<String>,
    pub activity_type: String,
    pub duration_seconds: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 学习时长（小时）
pub fn engagement_hours(total_seconds: i64) -> f64 {
    total_seconds.max(0) as f64 / 3600.0
}
