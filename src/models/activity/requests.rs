use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct CreateActivityRequest {
    pub course_code: Option<String>,
    pub activity_type: String,
    pub duration_seconds: i64,
}
