pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::activity::requests::CreateActivityRequest;
use crate::storage::Storage;

pub struct ActivityService {
    storage: Option<Arc<dyn Storage>>,
}

impl ActivityService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 记录学习时长
    pub async fn log_activity(
        &self,
        request: &HttpRequest,
        req: CreateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        create::log_activity(self, request, req).await
    }
}
