use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::services::ForecastService;

static FORECAST_SERVICE: Lazy<ForecastService> = Lazy::new(ForecastService::new_lazy);

pub async fn generate(req: HttpRequest) -> ActixResult<HttpResponse> {
    FORECAST_SERVICE.generate(&req).await
}

pub async fn latest(req: HttpRequest) -> ActixResult<HttpResponse> {
    FORECAST_SERVICE.latest(&req).await
}

pub fn configure_forecast_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/forecast")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            // 每次生成都会调用外部文本服务，单独限流
            .service(
                web::resource("")
                    .route(web::get().to(generate))
                    .wrap(middlewares::RateLimit::forecast()),
            )
            .route("/latest", web::get().to(latest)),
    );
}
