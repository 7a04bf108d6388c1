use super::SeaOrmStorage;
use crate::entity::activity_logs::{ActiveModel, Column, Entity as ActivityLogs};
use crate::errors::{PortalError, Result};
use crate::models::activity::{entities::ActivityLog, requests::CreateActivityRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QuerySelect, Set};

impl SeaOrmStorage {
    /// 记录学习时长
    pub async fn create_activity_log_impl(
        &self,
        student_id: i64,
        req: CreateActivityRequest,
    ) -> Result<ActivityLog> {
        let model = ActiveModel {
            student_id: Set(student_id),
            course_code: Set(req.course_code),
            activity_type: Set(req.activity_type),
            duration_seconds: Set(req.duration_seconds),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建学习记录失败: {e}")))?;

        Ok(result.into_activity())
    }

    /// 累计学习秒数
    pub async fn total_activity_seconds_impl(&self, student_id: i64) -> Result<i64> {
        // 不同数据库对 SUM(bigint) 的返回类型不一致，取出后在内存中求和
        let durations = ActivityLogs::find()
            .filter(Column::StudentId.eq(student_id))
            .select_only()
            .column(Column::DurationSeconds)
            .into_tuple::<i64>()
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询学习记录失败: {e}")))?;

        Ok(durations.into_iter().sum())
    }
}
