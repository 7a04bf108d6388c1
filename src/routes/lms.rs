use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::services::LmsService;

static LMS_SERVICE: Lazy<LmsService> = Lazy::new(LmsService::new_lazy);

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    LMS_SERVICE.list_courses(&req).await
}

pub async fn get_course(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    LMS_SERVICE.get_course(&req, path.into_inner()).await
}

pub async fn submit_assignment(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreateSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    LMS_SERVICE
        .submit_assignment(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn list_my_submissions(req: HttpRequest) -> ActixResult<HttpResponse> {
    LMS_SERVICE.list_my_submissions(&req).await
}

pub fn configure_lms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/lms")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/courses", web::get().to(list_courses))
            .route("/courses/{course_code}", web::get().to(get_course))
            .route(
                "/assignments/{id}/submissions",
                web::post().to(submit_assignment),
            )
            .route("/submissions", web::get().to(list_my_submissions)),
    );
}
