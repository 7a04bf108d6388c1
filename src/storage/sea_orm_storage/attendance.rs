use super::SeaOrmStorage;
use crate::entity::attendance::{Column as AttendanceColumn, Entity as Attendance};
use crate::entity::daily_attendance::{Column as DailyColumn, Entity as DailyAttendance};
use crate::errors::{PortalError, Result};
use crate::models::attendance::entities::{AttendanceRecord, DailyAttendance as DailyRecord};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 学生各课程出勤汇总
    pub async fn list_attendance_impl(&self, student_id: i64) -> Result<Vec<AttendanceRecord>> {
        let rows = Attendance::find()
            .filter(AttendanceColumn::StudentId.eq(student_id))
            .order_by_asc(AttendanceColumn::CourseCode)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询出勤记录失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_record()).collect())
    }

    /// 某课程每日出勤（日期倒序）
    pub async fn list_daily_attendance_impl(
        &self,
        student_id: i64,
        course_code: &str,
    ) -> Result<Vec<DailyRecord>> {
        let rows = DailyAttendance::find()
            .filter(DailyColumn::StudentId.eq(student_id))
            .filter(DailyColumn::CourseCode.eq(course_code))
            .order_by_desc(DailyColumn::Date)
            .order_by_asc(DailyColumn::Slot)
            .all(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询每日出勤失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_daily()).collect())
    }
}
