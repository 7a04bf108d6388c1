use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::services::AttendanceService;

static ATTENDANCE_SERVICE: Lazy<AttendanceService> = Lazy::new(AttendanceService::new_lazy);

pub async fn list_attendance(req: HttpRequest) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_attendance(&req).await
}

pub async fn list_daily(req: HttpRequest, path: web::Path<String>) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE.list_daily(&req, path.into_inner()).await
}

pub async fn toggle_expanded(
    req: HttpRequest,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    ATTENDANCE_SERVICE
        .toggle_expanded(&req, path.into_inner())
        .await
}

pub fn configure_attendance_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/attendance")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_attendance))
            .route("/{course_code}/daily", web::get().to(list_daily))
            .route("/{course_code}/expand", web::put().to(toggle_expanded)),
    );
}
