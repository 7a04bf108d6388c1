use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::teachers::requests::{CreateAssignmentRequest, CreateMaterialRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;
use crate::utils::validate::{validate_course_code, validate_file_url, validate_week_number};

use super::TeacherService;

const MAX_TITLE_LEN: usize = 200;
const MAX_ASSIGNMENT_MARKS: i32 = 1000;

fn validate_title(title: &str) -> Result<(), &'static str> {
    let title = title.trim();
    if title.is_empty() || title.chars().count() > MAX_TITLE_LEN {
        return Err("Title must be 1-200 characters");
    }
    Ok(())
}

fn validate_material(req: &CreateMaterialRequest) -> Result<(), &'static str> {
    validate_title(&req.title)?;
    validate_file_url(req.url.trim())?;
    validate_week_number(req.week_number)
}

fn validate_assignment(req: &CreateAssignmentRequest) -> Result<(), &'static str> {
    validate_title(&req.title)?;
    if !(1..=MAX_ASSIGNMENT_MARKS).contains(&req.max_marks) {
        return Err("Max marks must be between 1 and 1000");
    }
    Ok(())
}

/// 校验课程代码并确认当前教师讲授该课程
async fn check_course(
    storage: &dyn Storage,
    teacher_id: i64,
    course_code: &str,
) -> Result<(), HttpResponse> {
    if let Err(msg) = validate_course_code(course_code) {
        return Err(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    match storage.teaches_course(teacher_id, course_code).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotCourseTeacher,
            "You do not teach this course",
        ))),
        Err(e) => Err(ApiResponse::<()>::internal_error("Failed to check course", e)),
    }
}

pub async fn create_material(
    service: &TeacherService,
    request: &HttpRequest,
    course_code: String,
    mut req: CreateMaterialRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(msg) = validate_material(&req) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    let storage = service.get_storage(request)?;
    if let Err(resp) = check_course(storage.as_ref(), user.id, &course_code).await {
        return Ok(resp);
    }

    req.title = req.title.trim().to_string();
    req.url = req.url.trim().to_string();
    match storage.create_material(&course_code, req).await {
        Ok(material) => {
            info!(
                "Teacher {} published material {} to {}",
                user.id, material.id, course_code
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                material,
                "Material published successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to publish material", e)),
    }
}

pub async fn create_assignment(
    service: &TeacherService,
    request: &HttpRequest,
    course_code: String,
    mut req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(msg) = validate_assignment(&req) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    let storage = service.get_storage(request)?;
    if let Err(resp) = check_course(storage.as_ref(), user.id, &course_code).await {
        return Ok(resp);
    }

    req.title = req.title.trim().to_string();
    match storage.create_assignment(&course_code, req).await {
        Ok(assignment) => {
            info!(
                "Teacher {} published assignment {} to {}",
                user.id, assignment.id, course_code
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(
                assignment,
                "Assignment published successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::<()>::internal_error(
            "Failed to publish assignment",
            e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::MaterialType;

    #[test]
    fn test_validate_material() {
        let mut req = CreateMaterialRequest {
            title: "Week 1 slides".into(),
            material_type: MaterialType::Pdf,
            url: "https://cdn.example.edu/w1.pdf".into(),
            week_number: 1,
        };
        assert!(validate_material(&req).is_ok());

        req.week_number = 0;
        assert!(validate_material(&req).is_err());

        req.week_number = 2;
        req.url = "ftp://cdn.example.edu/w1.pdf".into();
        assert!(validate_material(&req).is_err());
    }

    #[test]
    fn test_validate_assignment() {
        let mut req = CreateAssignmentRequest {
            title: "Lab 1".into(),
            description: None,
            max_marks: 20,
            due_date: None,
        };
        assert!(validate_assignment(&req).is_ok());

        req.max_marks = 0;
        assert!(validate_assignment(&req).is_err());

        req.max_marks = 10;
        req.title = "  ".into();
        assert!(validate_assignment(&req).is_err());
    }
}
