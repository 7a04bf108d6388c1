use serde::Serialize;
use ts_rs::TS;

use super::entities::Notification;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
}
