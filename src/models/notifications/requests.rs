use serde::Deserialize;
use ts_rs::TS;

pub const DEFAULT_NOTIFICATION_LIMIT: u64 = 20;
pub const MAX_NOTIFICATION_LIMIT: u64 = 100;

#[derive(Debug, Default, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct NotificationListQuery {
    pub limit: Option<u64>,
}

impl NotificationListQuery {
    /// 条数限制，默认 20，最多 100
    pub fn effective_limit(&self) -> u64 {
        self.limit
            .unwrap_or(DEFAULT_NOTIFICATION_LIMIT)
            .clamp(1, MAX_NOTIFICATION_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_limit() {
        assert_eq!(NotificationListQuery::default().effective_limit(), 20);
        assert_eq!(NotificationListQuery { limit: Some(500) }.effective_limit(), 100);
        assert_eq!(NotificationListQuery { limit: Some(0) }.effective_limit(), 1);
        assert_eq!(NotificationListQuery { limit: Some(5) }.effective_limit(), 5);
    }
}
