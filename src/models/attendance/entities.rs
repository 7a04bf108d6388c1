use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程出勤汇总
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct AttendanceRecord {
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
    /// 数据源中可能缺失
    pub percentage: Option<f64>,
}

impl AttendanceRecord {
    /// 出勤百分比：优先使用存储值，缺失时按 attended / conducted 计算
    pub fn effective_percentage(&self) -> f64 {
        match self.percentage {
            Some(p) if p.is_finite() => p,
            _ if self.conducted > 0 => {
                f64::from(self.attended) / f64::from(self.conducted) * 100.0
            }
            _ => 0.0,
        }
    }
}

/// 各课程出勤百分比的平均值，无记录时为 0
pub fn average_attendance(records: &[AttendanceRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    records
        .iter()
        .map(AttendanceRecord::effective_percentage)
        .sum::<f64>()
        / records.len() as f64
}

// 每日出勤状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "OD")]
    OnDuty,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => write!(f, "Present"),
            AttendanceStatus::Absent => write!(f, "Absent"),
            AttendanceStatus::OnDuty => write!(f, "OD"),
        }
    }
}

impl std::str::FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Present" => Ok(AttendanceStatus::Present),
            "Absent" => Ok(AttendanceStatus::Absent),
            "OD" => Ok(AttendanceStatus::OnDuty),
            _ => Err(format!("Invalid attendance status: {s}")),
        }
    }
}

// 每日出勤记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attendance.ts")]
pub struct DailyAttendance {
    pub id: i64,
    pub student_id: i64,
    pub course_code: String,
    /// YYYY-MM-DD
    pub date: String,
    pub slot: String,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(conducted: i32, attended: i32, percentage: Option<f64>) -> AttendanceRecord {
        AttendanceRecord {
            id: 1,
            student_id: 1,
            course_code: "CS101".into(),
            course_name: "Programming".into(),
            conducted,
            attended,
            onduty: 0,
            medical_leave: 0,
            restricted_holiday: 0,
            extra_hours: 0,
            percentage,
        }
    }

    #[test]
    fn test_effective_percentage_prefers_stored_value() {
        assert_eq!(record(40, 10, Some(92.5)).effective_percentage(), 92.5);
    }

    #[test]
    fn test_effective_percentage_computed() {
        assert_eq!(record(40, 30, None).effective_percentage(), 75.0);
        assert_eq!(record(0, 0, None).effective_percentage(), 0.0);
    }

    #[test]
    fn test_average_attendance() {
        let rows = vec![record(40, 30, None), record(10, 0, Some(85.0))];
        assert_eq!(average_attendance(&rows), 80.0);
        assert_eq!(average_attendance(&[]), 0.0);
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(serde_json::to_string(&AttendanceStatus::OnDuty).unwrap(), "\"OD\"");
        assert_eq!("Absent".parse::<AttendanceStatus>(), Ok(AttendanceStatus::Absent));
    }
}
