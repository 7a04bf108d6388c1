use serde::Deserialize;
use ts_rs::TS;

// 提交作业：只提交文件地址
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub file_url: String,
}

/// 评分写入参数
#[derive(Debug, Clone)]
pub struct GradeUpdate {
    pub marks_obtained: i32,
    pub feedback: Option<String>,
    pub graded_by: i64,
}
