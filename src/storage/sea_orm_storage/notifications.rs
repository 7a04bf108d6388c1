use super::SeaOrmStorage;
use crate::entity::notifications::{Column, Entity as Notifications};
use crate::errors::{PortalError, Result};
use crate::models::notifications::entities::Notification;
use sea_orm::{EntityTrait, QueryOrder, QuerySelect};

impl SeaOrmStorage {
    /// 最新公告
    pub async fn list_notifications_impl(&self, limit: u64) -> Result<Vec<Notification>> {
        let rows = Notifications::find()
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询公告失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_notification()).collect())
    }
}
