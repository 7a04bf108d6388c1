pub mod daily;
pub mod list;
pub mod toggle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::cache::ObjectCache;
use crate::storage::Storage;

pub struct AttendanceService {
    storage: Option<Arc<dyn Storage>>,
}

impl AttendanceService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    pub(crate) fn get_cache(&self, request: &HttpRequest) -> ActixResult<Arc<dyn ObjectCache>> {
        super::cache_from_request(request)
    }

    // 各课程出勤汇总
    pub async fn list_attendance(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_attendance(self, request).await
    }

    // 某课程每日出勤
    pub async fn list_daily(
        &self,
        request: &HttpRequest,
        course_code: String,
    ) -> ActixResult<HttpResponse> {
        daily::list_daily(self, request, course_code).await
    }

    // 展开/收起某课程每日出勤
    pub async fn toggle_expanded(
        &self,
        request: &HttpRequest,
        course_code: String,
    ) -> ActixResult<HttpResponse> {
        toggle::toggle_expanded(self, request, course_code).await
    }
}
