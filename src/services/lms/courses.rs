use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::courses::responses::{CourseDetailResponse, CourseListResponse, group_by_week};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_course_code;

use super::LmsService;

pub async fn list_courses(
    service: &LmsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.list_enrolled_courses(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            CourseListResponse { items },
            "Courses retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to load courses", e)),
    }
}

pub async fn get_course(
    service: &LmsService,
    request: &HttpRequest,
    course_code: String,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(msg) = validate_course_code(&course_code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    let storage = service.get_storage(request)?;

    let course = match storage.get_course_by_code(&course_code).await {
        Ok(Some(course)) => course,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "Course not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load course", e)),
    };

    // 只有选课学生可以查看课程内容
    match storage.is_enrolled(user.id, &course_code).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to check enrollment", e)),
    }

    let materials = match storage.list_materials(&course_code).await {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load materials", e)),
    };
    let assignments = match storage.list_assignments(&course_code).await {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load assignments", e)),
    };
    let quizzes = match storage.list_quizzes(&course_code).await {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load quizzes", e)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseDetailResponse {
            course,
            weeks: group_by_week(materials),
            assignments,
            quizzes,
        },
        "Course retrieved successfully",
    )))
}
