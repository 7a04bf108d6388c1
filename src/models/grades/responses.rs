use serde::Serialize;
use ts_rs::TS;

use super::entities::{CreditRequirement, GradeRecord};

/// 学期汇总
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct SemesterSummary {
    pub semester: i32,
    pub total_credits: f64,
    pub total_points: f64,
    pub sgpa: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/grade.ts")]
pub struct GradeDetailsResponse {
    pub grades: Vec<GradeRecord>,
    pub semesters: Vec<SemesterSummary>,
    pub cgpa: f64,
    pub total_credits: f64,
    pub credit_requirements: Vec<CreditRequirement>,
}
