pub mod attempts;
pub mod engine;
pub mod registry;
pub mod session;

pub use registry::QuizSessionRegistry;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::models::quizzes::requests::{AnswerRequest, NavigateRequest};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_registry(
        &self,
        request: &HttpRequest,
    ) -> ActixResult<Arc<QuizSessionRegistry>> {
        request
            .app_data::<web::Data<Arc<QuizSessionRegistry>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Quiz registry not configured")
            })
    }

    // 开始测验
    pub async fn start(&self, request: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        session::start(self, request, quiz_id).await
    }

    // 当前会话
    pub async fn get_session(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
    ) -> ActixResult<HttpResponse> {
        session::get_session(self, request, quiz_id).await
    }

    // 作答
    pub async fn answer(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: AnswerRequest,
    ) -> ActixResult<HttpResponse> {
        session::answer(self, request, quiz_id, req).await
    }

    // 翻题
    pub async fn navigate(
        &self,
        request: &HttpRequest,
        quiz_id: i64,
        req: NavigateRequest,
    ) -> ActixResult<HttpResponse> {
        session::navigate(self, request, quiz_id, req).await
    }

    // 交卷
    pub async fn submit(&self, request: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        session::submit(self, request, quiz_id).await
    }

    // 历史作答
    pub async fn list_attempts(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        attempts::list_attempts(self, request).await
    }
}
