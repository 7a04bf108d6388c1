use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum NotificationType {
    General,
    Alert,
}

impl std::str::FromStr for NotificationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(NotificationType::General),
            "alert" => Ok(NotificationType::Alert),
            _ => Err(format!("Invalid notification type: {s}")),
        }
    }
}

// 公告
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub content: String,
    pub notification_type: NotificationType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
