use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::services::GradeService;

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn get_grades(req: HttpRequest) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.get_details(&req).await
}

pub fn configure_grades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/grades")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(get_grades)),
    );
}
