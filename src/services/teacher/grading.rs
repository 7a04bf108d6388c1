use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::submissions::requests::GradeUpdate;
use crate::models::teachers::{requests::GradeSubmissionRequest, responses::GradingQueueResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_marks;

use super::TeacherService;

const MAX_FEEDBACK_LEN: usize = 2000;

/// 去掉空白反馈
fn normalize_feedback(feedback: Option<String>) -> Option<String> {
    feedback
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
}

pub async fn list_pending(
    service: &TeacherService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.list_pending_submissions(user.id).await {
        Ok(items) => {
            let total = items.len() as i64;
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradingQueueResponse { items, total },
                "Pending submissions retrieved successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::<()>::internal_error(
            "Failed to load pending submissions",
            e,
        )),
    }
}

pub async fn grade_submission(
    service: &TeacherService,
    request: &HttpRequest,
    submission_id: i64,
    req: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let feedback = normalize_feedback(req.feedback);
    if feedback.as_ref().is_some_and(|f| f.chars().count() > MAX_FEEDBACK_LEN) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "Feedback is too long",
        )));
    }
    let storage = service.get_storage(request)?;

    // 1. 提交记录
    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load submission", e)),
    };

    // 2. 对应作业，用于满分校验与课程归属
    let assignment = match storage.get_assignment_by_id(submission.assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load assignment", e)),
    };

    if let Err(msg) = validate_marks(req.marks_obtained, assignment.max_marks) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidMarks, msg)));
    }

    // 3. 只能为自己所授课程评分
    match storage.teaches_course(user.id, &assignment.course_code).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotCourseTeacher,
                "You do not teach this course",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to check course", e)),
    }

    // 4. 单次更新，后写覆盖
    let update = GradeUpdate {
        marks_obtained: req.marks_obtained,
        feedback,
        graded_by: user.id,
    };
    match storage.grade_submission(submission_id, update).await {
        Ok(Some(graded)) => {
            info!(
                "Teacher {} graded submission {} with {}/{}",
                user.id, submission_id, req.marks_obtained, assignment.max_marks
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                graded,
                "Submission graded successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "Submission not found",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to grade submission", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_feedback() {
        assert_eq!(normalize_feedback(None), None);
        assert_eq!(normalize_feedback(Some("   ".into())), None);
        assert_eq!(
            normalize_feedback(Some("  Good work \n".into())),
            Some("Good work".to_string())
        );
    }
}
