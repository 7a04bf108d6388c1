use serde::Serialize;
use ts_rs::TS;

use super::entities::{AttendanceRecord, DailyAttendance};

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceItem {
    #[serde(flatten)]
    pub record: AttendanceRecord,
    pub effective_percentage: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceListResponse {
    pub items: Vec<AttendanceItem>,
    pub average_percentage: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DailyAttendanceResponse {
    pub course_code: String,
    pub items: Vec<DailyAttendance>,
}

/// 展开/收起某课程每日出勤的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceToggleResponse {
    /// 当前展开的课程，收起后为 None
    pub expanded_course: Option<String>,
    pub items: Vec<DailyAttendance>,
}
