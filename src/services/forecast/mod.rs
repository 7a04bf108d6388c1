pub mod generate;
pub mod heuristic;
pub mod insight;
pub mod latest;

pub use insight::InsightGenerator;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::storage::Storage;

pub struct ForecastService {
    storage: Option<Arc<dyn Storage>>,
}

impl ForecastService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_insight(&self, request: &HttpRequest) -> ActixResult<Arc<InsightGenerator>> {
        request
            .app_data::<web::Data<Arc<InsightGenerator>>>()
            .map(|data| data.get_ref().clone())
            .ok_or_else(|| {
                actix_web::error::ErrorInternalServerError("Insight generator not configured")
            })
    }

    pub(crate) fn get_config(&self) -> &AppConfig {
        AppConfig::get()
    }

    // 计算并保存预测
    pub async fn generate(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        generate::generate(self, request).await
    }

    // 最近一次预测
    pub async fn latest(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        latest::latest(self, request).await
    }
}
