use serde::Deserialize;
use ts_rs::TS;

// 作答：按题目 ID 记录所选选项
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct AnswerRequest {
    pub question_id: i64,
    pub option: i32,
}

// 翻题方向
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub enum NavigateDirection {
    Next,
    Previous,
}

#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct NavigateRequest {
    pub direction: NavigateDirection,
}
