use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::auth::UserRole;
use crate::models::quizzes::requests::{AnswerRequest, NavigateRequest};
use crate::services::QuizService;

static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

pub async fn start_quiz(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.start(&req, path.into_inner()).await
}

pub async fn get_session(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.get_session(&req, path.into_inner()).await
}

pub async fn answer(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<AnswerRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .answer(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn navigate(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<NavigateRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .navigate(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn submit(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.submit(&req, path.into_inner()).await
}

pub async fn list_attempts(req: HttpRequest) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.list_attempts(&req).await
}

pub fn configure_quizzes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireRole::new_any(UserRole::student_roles()))
            .wrap(middlewares::RequireJWT)
            // 固定路径需在 /{id} 之前注册
            .route("/attempts", web::get().to(list_attempts))
            .route("/{id}/start", web::post().to(start_quiz))
            .route("/{id}/session", web::get().to(get_session))
            .route("/{id}/answers", web::put().to(answer))
            .route("/{id}/navigate", web::post().to(navigate))
            .route("/{id}/submit", web::post().to(submit)),
    );
}
