//! 课程出勤汇总实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub course_code: String,
    pub course_name: String,
    pub conducted: i32,
    pub attended: i32,
    pub onduty: i32,
    pub medical_leave: i32,
    pub restricted_holiday: i32,
    pub extra_hours: i32,
    pub percentage: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_record(self) -> crate::models::attendance::entities::AttendanceRecord {
        crate::models::attendance::entities::AttendanceRecord {
            id: self.id,
            student_id: self.student_id,
            course_code: self.course_code,
            course_name: self.course_name,
            conducted: self.conducted,
            attended: self.attended,
            onduty: self.onduty,
            medical_leave: self.medical_leave,
            restricted_holiday: self.restricted_holiday,
            extra_hours: self.extra_hours,
            percentage: self.percentage,
        }
    }
}
