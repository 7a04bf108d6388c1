use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程成绩
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeRecord {
    pub id: i64,
    pub student_id: i64,
    pub semester: i32,
    pub course_code: String,
    pub course_name: String,
    pub credits: f64,
    pub grade_points: f64,
    pub grade: String,
    pub category: String,
    pub exam_month_year: String,
}

// 学分要求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct CreditRequirement {
    pub id: i64,
    pub student_id: i64,
    pub category: String,
    pub min_credits: f64,
    pub studied: f64,
    pub earned: f64,
    pub to_be_earned: f64,
}
