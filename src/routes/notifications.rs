use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::models::notifications::requests::NotificationListQuery;
use crate::services::NotificationService;

static NOTIFICATION_SERVICE: Lazy<NotificationService> =
    Lazy::new(NotificationService::new_lazy);

pub async fn list_notifications(
    req: HttpRequest,
    query: web::Query<NotificationListQuery>,
) -> ActixResult<HttpResponse> {
    NOTIFICATION_SERVICE
        .list_notifications(&req, query.into_inner())
        .await
}

// 学生与教师都可查看公告
pub fn configure_notifications_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/notifications")
            .wrap(middlewares::RequireRole::new_any(UserRole::all_roles()))
            .wrap(middlewares::RequireJWT)
            .route("", web::get().to(list_notifications)),
    );
}
