use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::quizzes::{entities::average_score, responses::QuizAttemptListResponse};

use super::QuizService;

pub async fn list_attempts(
    service: &QuizService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.list_quiz_attempts(user.id).await {
        Ok(items) => {
            let average_score = average_score(&items);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                QuizAttemptListResponse {
                    items,
                    average_score,
                },
                "Quiz attempts retrieved successfully",
            )))
        }
        Err(e) => Ok(ApiResponse::<()>::internal_error(
            "Failed to load quiz attempts",
            e,
        )),
    }
}
