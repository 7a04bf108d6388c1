pub mod courses;
pub mod submissions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::storage::Storage;

pub struct LmsService {
    storage: Option<Arc<dyn Storage>>,
}

impl LmsService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 已选课程
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::list_courses(self, request).await
    }

    // 课程详情
    pub async fn get_course(
        &self,
        request: &HttpRequest,
        course_code: String,
    ) -> ActixResult<HttpResponse> {
        courses::get_course(self, request, course_code).await
    }

    // 提交作业
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        assignment_id: i64,
        req: CreateSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        submissions::submit_assignment(self, request, assignment_id, req).await
    }

    // 我的提交
    pub async fn list_my_submissions(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        submissions::list_my_submissions(self, request).await
    }
}
