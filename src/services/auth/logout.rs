use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::require_jwt::{bearer_token, session_cache_key};
use crate::models::ApiResponse;
use crate::utils::jwt::JwtUtils;

use super::AuthService;

/// 处理登出
///
/// 清空 refresh_token cookie；若携带 access 令牌，同时移除缓存中的会话资料。
/// access 令牌过期后仍可登出，因此该路由不要求 JWT。
pub async fn handle_logout(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(token) = bearer_token(request) {
        let cache = service.get_cache(request)?;
        cache.remove(&session_cache_key(token)).await;
    }

    // max_age=0 会让浏览器删除该 cookie
    let empty_cookie = JwtUtils::create_empty_refresh_token_cookie();

    Ok(HttpResponse::Ok()
        .cookie(empty_cookie)
        .json(ApiResponse::<()>::success_empty("Logged out successfully")))
}
