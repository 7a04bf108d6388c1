use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::models::teachers::requests::{
    CreateAssignmentRequest, CreateMaterialRequest, GradeSubmissionRequest,
};
use crate::services::TeacherService;

static TEACHER_SERVICE: Lazy<TeacherService> = Lazy::new(TeacherService::new_lazy);

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_courses(&req).await
}

pub async fn list_pending(req: HttpRequest) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE.list_pending(&req).await
}

pub async fn grade_submission(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<GradeSubmissionRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .grade_submission(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn create_material(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_material(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    TEACHER_SERVICE
        .create_assignment(&req, path.into_inner(), body.into_inner())
        .await
}

pub fn configure_teacher_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/teacher")
            .wrap(middlewares::RequireRole::new_any(UserRole::teacher_roles()))
            .wrap(middlewares::RequireJWT)
            .route("/courses", web::get().to(list_courses))
            .route(
                "/courses/{course_code}/materials",
                web::post().to(create_material),
            )
            .route(
                "/courses/{course_code}/assignments",
                web::post().to(create_assignment),
            )
            .route("/submissions/pending", web::get().to(list_pending))
            .route("/submissions/{id}/grade", web::put().to(grade_submission)),
    );
}
