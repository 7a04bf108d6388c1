use serde::Serialize;
use ts_rs::TS;

use crate::models::courses::entities::{Assignment, Course};
use crate::models::submissions::entities::Submission;

/// 待评分提交（附带学生与作业信息）
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct PendingSubmissionItem {
    pub submission: Submission,
    pub student_name: String,
    pub student_reg_no: String,
    pub assignment: Assignment,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct GradingQueueResponse {
    pub items: Vec<PendingSubmissionItem>,
    pub total: i64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct TeacherCoursesResponse {
    pub items: Vec<Course>,
}
