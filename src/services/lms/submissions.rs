use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::submissions::{
    requests::CreateSubmissionRequest, responses::SubmissionListResponse,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_file_url;

use super::LmsService;

pub async fn submit_assignment(
    service: &LmsService,
    request: &HttpRequest,
    assignment_id: i64,
    req: CreateSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let file_url = req.file_url.trim();
    if let Err(msg) = validate_file_url(file_url) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidFileUrl, msg)));
    }
    let storage = service.get_storage(request)?;

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load assignment", e)),
    };

    match storage.is_enrolled(user.id, &assignment.course_code).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to check enrollment", e)),
    }

    match storage
        .create_submission(assignment.id, user.id, file_url)
        .await
    {
        Ok(submission) => {
            info!(
                "Student {} submitted assignment {} as submission {}",
                user.id, assignment.id, submission.id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                submission,
                "Assignment submitted successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to submit assignment", e)),
    }
}

pub async fn list_my_submissions(
    service: &LmsService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.list_student_submissions(user.id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            SubmissionListResponse { items },
            "Submissions retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to load submissions", e)),
    }
}
