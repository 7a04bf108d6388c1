use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::cache::{CacheResult, ObjectCache};
use crate::models::attendance::responses::AttendanceToggleResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_course_code;

use super::AttendanceService;

/// 每个学生同一时间最多展开一门课程
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Option<String>,
}

impl ExpansionState {
    pub fn new(expanded: Option<String>) -> Self {
        Self { expanded }
    }

    pub fn expanded(&self) -> Option<&str> {
        self.expanded.as_deref()
    }

    /// 切换课程：已展开则收起，否则展开（替换之前展开的课程）。
    /// 返回切换后该课程是否处于展开状态。
    pub fn toggle(&mut self, course_code: &str) -> bool {
        if self.expanded.as_deref() == Some(course_code) {
            self.expanded = None;
            false
        } else {
            self.expanded = Some(course_code.to_string());
            true
        }
    }
}

pub fn expansion_cache_key(student_id: i64) -> String {
    format!("attendance:expanded:{student_id}")
}

async fn load_state(cache: &dyn ObjectCache, key: &str) -> ExpansionState {
    match cache.get_json::<String>(key).await {
        CacheResult::Found(course) => ExpansionState::new(Some(course)),
        _ => ExpansionState::default(),
    }
}

pub async fn toggle_expanded(
    service: &AttendanceService,
    request: &HttpRequest,
    course_code: String,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    if let Err(msg) = validate_course_code(&course_code) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ValidationFailed, msg)));
    }
    let storage = service.get_storage(request)?;
    let cache = service.get_cache(request)?;

    let key = expansion_cache_key(user.id);
    let mut state = load_state(cache.as_ref(), &key).await;

    if !state.toggle(&course_code) {
        cache.remove(&key).await;
        return Ok(HttpResponse::Ok().json(ApiResponse::success(
            AttendanceToggleResponse {
                expanded_course: None,
                items: Vec::new(),
            },
            "Course collapsed",
        )));
    }

    let items = match storage.list_daily_attendance(user.id, &course_code).await {
        Ok(items) => items,
        Err(e) => {
            return Ok(ApiResponse::<()>::internal_error(
                "Failed to load daily attendance",
                e,
            ));
        }
    };
    cache.insert_json(key, &course_code, 0).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceToggleResponse {
            expanded_course: state.expanded().map(str::to_string),
            items,
        },
        "Course expanded",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::object_cache::moka::MokaCacheWrapper;

    #[test]
    fn test_expand_then_collapse_returns_to_none() {
        let mut state = ExpansionState::default();
        assert!(state.toggle("CS101"));
        assert_eq!(state.expanded(), Some("CS101"));
        assert!(!state.toggle("CS101"));
        assert_eq!(state, ExpansionState::default());
    }

    #[test]
    fn test_expanding_other_course_replaces() {
        let mut state = ExpansionState::new(Some("CS101".into()));
        assert!(state.toggle("MA102"));
        assert_eq!(state.expanded(), Some("MA102"));
    }

    #[test]
    fn test_double_toggle_is_identity() {
        for initial in [None, Some("CS101".to_string()), Some("PH103".to_string())] {
            let start = ExpansionState::new(initial);
            let mut state = start.clone();
            state.toggle("CS101");
            state.toggle("CS101");
            // 从其他课程出发时，两次切换后停在收起状态
            if start.expanded() == Some("PH103") {
                assert_eq!(state.expanded(), None);
            } else {
                assert_eq!(state, start);
            }
        }
    }

    #[tokio::test]
    async fn test_state_round_trips_through_cache() {
        let cache: Box<dyn ObjectCache> = Box::new(MokaCacheWrapper::with_capacity(100, 60));
        let key = expansion_cache_key(7);

        assert_eq!(load_state(cache.as_ref(), &key).await, ExpansionState::default());

        cache.insert_json(key.clone(), "CS101", 0).await;
        let state = load_state(cache.as_ref(), &key).await;
        assert_eq!(state.expanded(), Some("CS101"));

        cache.remove(&key).await;
        assert_eq!(load_state(cache.as_ref(), &key).await.expanded(), None);
    }
}
