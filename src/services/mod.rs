pub mod activity;
pub mod attendance;
pub mod auth;
pub mod forecast;
pub mod grades;
pub mod lms;
pub mod notifications;
pub mod quizzes;
pub mod students;
pub mod teacher;

pub use activity::ActivityService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use forecast::ForecastService;
pub use grades::GradeService;
pub use lms::LmsService;
pub use notifications::NotificationService;
pub use quizzes::QuizService;
pub use students::StudentService;
pub use teacher::TeacherService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::middlewares::RequireJWT;
use crate::models::auth::SessionUser;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从 app_data 中取出存储实例
pub(crate) fn storage_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Storage not configured"))
}

/// 从 app_data 中取出对象缓存
pub(crate) fn cache_from_request(request: &HttpRequest) -> ActixResult<Arc<dyn ObjectCache>> {
    request
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| actix_web::error::ErrorInternalServerError("Cache not configured"))
}

/// 当前会话用户，缺失时给出 401 响应
pub(crate) fn session_user(request: &HttpRequest) -> Result<SessionUser, HttpResponse> {
    RequireJWT::extract_session_user(request).ok_or_else(|| {
        HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        ))
    })
}
