use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::attendance::responses::DailyAttendanceResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_course_code;

use super::AttendanceService;

pub async fn list_daily(
    service: &AttendanceService,
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

    match storage.list_daily_attendance(user.id, &course_code).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            DailyAttendanceResponse { course_code, items },
            "Daily attendance retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error(
            "Failed to load daily attendance",
            e,
        )),
    }
}
