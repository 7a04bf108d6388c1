use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::teachers::responses::TeacherCoursesResponse;

use super::TeacherService;

pub async fn list_courses(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.list_teacher_courses(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            TeacherCoursesResponse { items },
            "Courses retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to load courses", e)),
    }
}
