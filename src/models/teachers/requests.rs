use serde::Deserialize;
use ts_rs::TS;

// 评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct GradeSubmissionRequest {
    pub marks_obtained: i32,
    pub feedback: Option<String>,
}

// 发布课程资料
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateMaterialRequest {
    pub title: String,
    pub material_type: crate::models::courses::entities::MaterialType,
    pub url: String,
    pub week_number: i32,
}

// 发布作业
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub max_marks: i32,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}
