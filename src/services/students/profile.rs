use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::students::responses::StudentProfileResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::StudentService;

pub async fn get_profile(
    service: &StudentService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.get_student_by_id(user.id).await {
        Ok(Some(student)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            StudentProfileResponse::from_student(student),
            "Profile retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to load profile", e)),
    }
}
