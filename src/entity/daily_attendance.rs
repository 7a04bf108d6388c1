//! 每日出勤实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "daily_attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_code: String,
    pub date: String,
    pub slot: String,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_daily(self) -> crate::models::attendance::entities::DailyAttendance {
        use crate::models::attendance::entities::{AttendanceStatus, DailyAttendance};

        DailyAttendance {
            id: self.id,
            student_id: self.student_id,
            course_code: self.course_code,
            date: self.date,
            slot: self.slot,
            status: self
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Absent),
        }
    }
}
