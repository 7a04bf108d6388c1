use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::grades::responses::GradeDetailsResponse;

use super::GradeService;
use super::summary::{cgpa, summarize_semesters, weighted_average};

pub async fn get_details(
    service: &GradeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    let grades = match storage.list_grades(user.id).await {
        Ok(grades) => grades,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load grades", e)),
    };
    let credit_requirements = match storage.list_credit_requirements(user.id).await {
        Ok(rows) => rows,
        Err(e) => {
            return Ok(ApiResponse::<()>::internal_error(
                "Failed to load credit requirements",
                e,
            ));
        }
    };

    let semesters = summarize_semesters(&grades);
    let cgpa = cgpa(&grades);
    let (total_credits, _, _) = weighted_average(&grades);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GradeDetailsResponse {
            grades,
            semesters,
            cgpa,
            total_credits,
            credit_requirements,
        },
        "Grades retrieved successfully",
    )))
}
