/*!
 * JWT 认证中间件
 *
 * 校验 `Authorization: Bearer <access_token>`，并把当前会话用户
 * [`SessionUser`] 放入请求扩展。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::RequireJWT;
 *
 * App::new().service(
 *     web::scope("/api/v1/grades")
 *         .wrap(RequireJWT)
 *         .route("", web::get().to(handler)),
 * );
 *
 * async fn handler(req: HttpRequest) -> HttpResponse {
 *     let user = RequireJWT::extract_session_user(&req);
 *     // ...
 * }
 * ```
 *
 * ## 认证流程
 *
 * 1. 验证 access 令牌的签名、有效期和用途
 * 2. 按 `session:{token}` 查缓存中的会话资料
 * 3. 缓存未命中时按令牌中的角色从学生表或教师表加载，再写回缓存
 * 4. 任何一步失败都返回 401
 */

use crate::cache::{CacheResult, ObjectCache};
use crate::models::ErrorCode;
use crate::models::auth::{SessionUser, UserRole};
use crate::storage::Storage;
use crate::utils::jwt::{JwtUtils, TokenKind};
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info, warn};

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";

#[derive(Clone)]
pub struct RequireJWT;

/// 会话缓存键
pub fn session_cache_key(token: &str) -> String {
    format!("session:{token}")
}

/// 从请求头中取出 access 令牌
pub fn bearer_token(req: &actix_web::HttpRequest) -> Option<&str> {
    req.headers()
        .get(actix_web::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
}

/// 按令牌中的身份加载会话资料
pub async fn load_session_user(
    storage: &dyn Storage,
    user_id: i64,
    role: UserRole,
    demo: bool,
) -> Result<Option<SessionUser>, String> {
    let user = match role {
        UserRole::Student => storage
            .get_student_by_id(user_id)
            .await
            .map_err(|e| format!("Failed to load student: {e}"))?
            .map(|s| s.to_session_user(demo)),
        UserRole::Teacher => storage
            .get_teacher_by_id(user_id)
            .await
            .map_err(|e| format!("Failed to load teacher: {e}"))?
            .map(|t| t.to_session_user()),
    };
    Ok(user)
}

async fn authenticate(req: &ServiceRequest) -> Result<SessionUser, String> {
    let token = bearer_token(req.request())
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?
        .to_string();

    let claims = JwtUtils::verify(&token, TokenKind::Access).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid or expired token".to_string()
    })?;

    let cache = req
        .app_data::<actix_web::web::Data<Arc<dyn ObjectCache>>>()
        .ok_or_else(|| "Cache not configured".to_string())?
        .get_ref()
        .clone();

    let key = session_cache_key(&token);
    if let CacheResult::Found(user) = cache.get_json::<SessionUser>(&key).await {
        return Ok(user);
    }

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .ok_or_else(|| "Storage not configured".to_string())?
        .get_ref()
        .clone();

    let user_id = claims
        .user_id()
        .map_err(|_| "Invalid user ID in token".to_string())?;

    let user = load_session_user(storage.as_ref(), user_id, claims.role, claims.demo)
        .await
        .map_err(|e| {
            warn!("{}", e);
            "Failed to load session".to_string()
        })?
        .ok_or_else(|| "User not found".to_string())?;

    // 缓存时长与 access 令牌剩余有效期一致
    let remaining = (claims.exp as i64 - chrono::Utc::now().timestamp()).max(1) as u64;
    cache.insert_json(key, &user, remaining).await;

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 预检请求直接放行
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            match authenticate(&req).await {
                Ok(user) => {
                    debug!(
                        "JWT authentication successful for {} {}",
                        user.role, user.id
                    );
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

impl RequireJWT {
    /// 从请求扩展中取出会话用户，须在 RequireJWT 保护的路由中使用
    pub fn extract_session_user(req: &actix_web::HttpRequest) -> Option<SessionUser> {
        req.extensions().get::<SessionUser>().cloned()
    }

    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<SessionUser>().map(|user| user.id)
    }

    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions().get::<SessionUser>().map(|user| user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cache_key() {
        assert_eq!(session_cache_key("abc"), "session:abc");
    }
}
