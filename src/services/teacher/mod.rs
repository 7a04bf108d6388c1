pub mod content;
pub mod courses;
pub mod grading;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::teachers::requests::{
    CreateAssignmentRequest, CreateMaterialRequest, GradeSubmissionRequest,
};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> ActixResult<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => super::storage_from_request(request),
        }
    }

    // 所授课程
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        courses::list_courses(self, request).await
    }

    // 待评分队列
    pub async fn list_pending(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        grading::list_pending(self, request).await
    }

    // 评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        submission_id: i64,
        req: GradeSubmissionRequest,
    ) -> ActixResult<HttpResponse> {
        grading::grade_submission(self, request, submission_id, req).await
    }

    // 发布资料
    pub async fn create_material(
        &self,
        request: &HttpRequest,
        course_code: String,
        req: CreateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        content::create_material(self, request, course_code, req).await
    }

    // 发布作业
    pub async fn create_assignment(
        &self,
        request: &HttpRequest,
        course_code: String,
        req: CreateAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        content::create_assignment(self, request, course_code, req).await
    }
}
