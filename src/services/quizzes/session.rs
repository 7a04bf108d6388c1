use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use super::engine::QuizSession;
use super::registry::QuizSessionError;
use crate::models::quizzes::requests::{AnswerRequest, NavigateRequest};
use crate::models::quizzes::responses::QuizResultResponse;
use crate::models::{ApiResponse, ErrorCode};

fn session_error_response(err: QuizSessionError) -> HttpResponse {
    match err {
        QuizSessionError::NotFound => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuizSessionNotFound,
            "No active session for this quiz",
        )),
        QuizSessionError::LimitReached => {
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::QuizSessionLimitReached,
                "Too many active quiz sessions, please try again later",
            ))
        }
        QuizSessionError::InvalidAnswer(e) => HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::InvalidQuizAnswer, e.message())),
        QuizSessionError::Storage(e) => {
            ApiResponse::<()>::internal_error("Failed to save quiz attempt", e)
        }
    }
}

pub async fn start(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let registry = service.get_registry(request)?;
    let key = (user.id, quiz_id);

    // 已有会话时直接返回，不重新计时
    if let Some(existing) = registry.snapshot(key) {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            existing,
            "Quiz session resumed",
        )));
    }

    let storage = service.get_storage(request)?;
    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuizNotFound,
                "Quiz not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load quiz", e)),
    };

    match storage.is_enrolled(user.id, &quiz.course_code).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotEnrolled,
                "You are not enrolled in this course",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to check enrollment", e)),
    }

    let questions = match storage.list_quiz_questions(quiz_id).await {
        Ok(questions) if questions.is_empty() => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::QuizHasNoQuestions,
                "This quiz has no questions",
            )));
        }
        Ok(questions) => questions,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load questions", e)),
    };

    match registry.start(key, QuizSession::new(&quiz, user.id, questions)) {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            snapshot,
            "Quiz session started",
        ))),
        Err(e) => Ok(session_error_response(e)),
    }
}

pub async fn get_session(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let registry = service.get_registry(request)?;

    match registry.snapshot((user.id, quiz_id)) {
        Some(snapshot) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            snapshot,
            "Quiz session retrieved successfully",
        ))),
        None => Ok(session_error_response(QuizSessionError::NotFound)),
    }
}

pub async fn answer(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    req: AnswerRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let registry = service.get_registry(request)?;

    match registry.answer((user.id, quiz_id), req.question_id, req.option) {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            snapshot,
            "Answer recorded",
        ))),
        Err(e) => Ok(session_error_response(e)),
    }
}

pub async fn navigate(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    req: NavigateRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let registry = service.get_registry(request)?;

    match registry.navigate((user.id, quiz_id), req.direction) {
        Ok(snapshot) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            snapshot,
            "Question changed",
        ))),
        Err(e) => Ok(session_error_response(e)),
    }
}

pub async fn submit(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let registry = service.get_registry(request)?;

    match registry.submit((user.id, quiz_id)).await {
        Ok(attempt) => {
            tracing::info!(
                "Quiz submitted: student {} quiz {} score {}",
                user.id,
                quiz_id,
                attempt.score
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                QuizResultResponse { attempt },
                "Quiz submitted successfully",
            )))
        }
        Err(e) => Ok(session_error_response(e)),
    }
}
