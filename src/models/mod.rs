//! 数据模型定义
//!
//! 与 `entity` 模块的数据库实体分离，这里的类型直接用于 API 的请求与响应，
//! 并通过 ts-rs 导出到前端。

pub mod activity;
pub mod attendance;
pub mod auth;
pub mod common;
pub mod courses;
pub mod forecast;
pub mod grades;
pub mod notifications;
pub mod quizzes;
pub mod students;
pub mod submissions;
pub mod teachers;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub use common::response::ApiResponse;

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// API 业务错误码
///
/// 按千位分组：1xxx 请求参数，2xxx 认证授权，3xxx 资源，4xxx 业务冲突，5xxx 服务端。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    BadRequest = 1000,
    ValidationFailed = 1001,
    InvalidFileUrl = 1002,
    InvalidMarks = 1003,
    InvalidQuizAnswer = 1004,

    Unauthorized = 2000,
    AuthFailed = 2001,
    Forbidden = 2002,
    NotEnrolled = 2003,
    NotCourseTeacher = 2004,
    RateLimitExceeded = 2005,

    NotFound = 3000,
    StudentNotFound = 3001,
    CourseNotFound = 3002,
    AssignmentNotFound = 3003,
    SubmissionNotFound = 3004,
    QuizNotFound = 3005,
    QuizSessionNotFound = 3006,
    PredictionNotFound = 3007,

    QuizSessionLimitReached = 4000,
    QuizHasNoQuestions = 4001,

    InternalServerError = 5000,
    ConnectionError = 5001,
}
