use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::activity::requests::CreateActivityRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{validate_activity_duration, validate_course_code};

use super::ActivityService;

const MAX_ACTIVITY_TYPE_LEN: usize = 50;

fn validate_request(req: &CreateActivityRequest) -> Result<(), &'static str> {
    validate_activity_duration(req.duration_seconds)?;
    let activity_type = req.activity_type.trim();
    if activity_type.is_empty() || activity_type.len() > MAX_ACTIVITY_TYPE_LEN {
        return Err("Activity type must be 1-50 characters");
    }
    if let Some(code) = &req.course_code {
        validate_course_code(code)?;
    }
    Ok(())
}

/// 填写了课程时，学生必须已选该课程
async fn course_allowed(
    storage: &dyn Storage,
    student_id: i64,
    course_code: Option<&str>,
) -> crate::errors::Result<bool> {
    match course_code {
        Some(code) => storage.is_enrolled(student_id, code).await,
        None => Ok(true),
    }
}

pub async fn log_activity(
    service: &ActivityService,
    request: &HttpRequest,
    req: CreateActivityRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(msg) = validate_request(&req) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    let storage = service.get_storage(request)?;

    match course_allowed(storage.as_ref(), user.id, req.course_code.as_deref()).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to check enrollment", e)),
    }

    match storage.create_activity_log(user.id, req).await {
        Ok(log) => Ok(HttpResponse::Created().json(ApiResponse::success(
            log,
            "Activity logged successfully",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to log activity", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::sea_orm_storage::tests::{enroll, memory_storage, seed_student};

    fn request(duration_seconds: i64, activity_type: &str) -> CreateActivityRequest {
        CreateActivityRequest {
            course_code: Some("CS101".into()),
            activity_type: activity_type.into(),
            duration_seconds,
        }
    }

    #[test]
    fn test_duration_bounds() {
        assert!(validate_request(&request(0, "reading")).is_err());
        assert!(validate_request(&request(1, "reading")).is_ok());
        assert!(validate_request(&request(86_400, "reading")).is_ok());
        assert!(validate_request(&request(86_401, "reading")).is_err());
    }

    #[test]
    fn test_activity_type_required() {
        assert!(validate_request(&request(60, "   ")).is_err());
        assert!(validate_request(&request(60, &"x".repeat(51))).is_err());
    }

    #[test]
    fn test_bad_course_code() {
        let mut req = request(60, "video");
        req.course_code = Some("CS 101!".into());
        assert!(validate_request(&req).is_err());
        req.course_code = None;
        assert!(validate_request(&req).is_ok());
    }

    #[tokio::test]
    async fn test_course_must_be_enrolled() {
        let storage = memory_storage().await;
        let student = seed_student(&storage, "9924008001").await;

        assert!(course_allowed(&storage, student.id, None).await.unwrap());
        assert!(!course_allowed(&storage, student.id, Some("CS101")).await.unwrap());

        enroll(&storage, student.id, "CS101").await;
        assert!(course_allowed(&storage, student.id, Some("CS101")).await.unwrap());
        assert!(!course_allowed(&storage, student.id, Some("MA102")).await.unwrap());
    }
}
