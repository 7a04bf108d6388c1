use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::activity::requests::CreateActivityRequest;
use crate::models::auth::UserRole;
use crate::services::ActivityService;

static ACTIVITY_SERVICE: Lazy<ActivityService> = Lazy::new(ActivityService::new_lazy);

pub async fn log_activity(
    req: HttpRequest,
    body: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE.log_activity(&req, body.into_inner()).await
}

pub fn configure_activity_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activity")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::post().to(log_activity)),
    );
}
