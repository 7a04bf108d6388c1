/*!
 * 速率限制中间件
 *
 * 限制登录、令牌刷新等端点的请求频率。
 *
 * ## 使用方法
 *
 * ```rust,ignore
 * use actix_web::{web, App};
 * use crate::middlewares::rate_limit::RateLimit;
 *
 * App::new()
 *     .service(
 *         web::resource("/api/v1/auth/login")
 *             .wrap(RateLimit::login())  // 5次/分钟
 *             .route(web::post().to(login_handler))
 *     )
 * ```
 *
 * ## 限制规则
 *
 * - 固定时间窗口计数，窗口从该键的第一次请求开始
 * - 已登录请求按会话用户（角色 + ID）计数，其余按客户端 IP
 * - 超过限制返回 429 Too Many Requests，并带 Retry-After
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use moka::future::Cache;
use once_cell::sync::Lazy;
use std::rc::Rc;
use std::time::Duration;
use tracing::warn;

use crate::models::{ApiResponse, ErrorCode};

/// 全局速率限制缓存
/// 键: 前缀:身份，值: 当前窗口
static RATE_LIMIT_CACHE: Lazy<Cache<String, Window>> = Lazy::new(|| {
    Cache::builder()
        .time_to_idle(Duration::from_secs(3600))
        .max_capacity(100_000)
        .build()
});

/// 固定窗口计数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    started_at: i64,
    count: u32,
}

/// 计数结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Decision {
    Allow { remaining: u32 },
    Reject { retry_after: u64 },
}

/// 根据当前窗口计算本次请求是否放行以及新的窗口
fn decide(current: Option<Window>, now: i64, max_requests: u32, window_secs: u64) -> (Window, Decision) {
    let window = match current {
        Some(w) if now - w.started_at < window_secs as i64 => w,
        _ => Window {
            started_at: now,
            count: 0,
        },
    };

    if window.count >= max_requests {
        let retry_after = (window.started_at + window_secs as i64 - now).max(1) as u64;
        return (window, Decision::Reject { retry_after });
    }

    let next = Window {
        count: window.count + 1,
        ..window
    };
    (
        next,
        Decision::Allow {
            remaining: max_requests - next.count,
        },
    )
}

/// 速率限制配置
#[derive(Clone)]
pub struct RateLimit {
    /// 时间窗口内允许的最大请求数
    max_requests: u32,
    /// 时间窗口（秒）
    window_secs: u64,
    /// 限制键前缀（用于区分不同端点）
    key_prefix: String,
}

impl RateLimit {
    /// 创建新的速率限制器
    ///
    /// # 参数
    /// - `max_requests`: 时间窗口内允许的最大请求数
    /// - `window_secs`: 时间窗口（秒）
    pub fn new(max_requests: u32, window_secs: u64) -> Self {
        Self {
            max_requests,
            window_secs,
            key_prefix: String::new(),
        }
    }

    /// 设置限制键前缀
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.key_prefix = prefix.to_string();
        self
    }

    /// 登录端点限制：5次/分钟/IP
    pub fn login() -> Self {
        Self::new(5, 60).with_prefix("login")
    }

    /// 刷新令牌限制：10次/分钟/IP
    pub fn refresh_token() -> Self {
        Self::new(10, 60).with_prefix("refresh")
    }

    /// 预测接口限制：每次请求都会调用外部文本生成服务
    pub fn forecast() -> Self {
        Self::new(10, 60).with_prefix("forecast")
    }
}

/// 从请求中提取客户端 IP
///
/// 安全注意事项：
/// - 如果服务部署在反向代理后面，需要在反向代理中配置正确的 X-Forwarded-For / X-Real-IP 头
/// - 此实现会验证 IP 格式，防止伪造的无效头导致问题
/// - 在不可信网络中直接暴露服务时，攻击者可能伪造转发头来绕过限制
fn extract_client_ip(req: &ServiceRequest) -> String {
    // 尝试从连接信息获取真实 IP（最可信）
    let connection_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|s| s.to_string());

    // 如果连接信息有有效 IP，优先使用
    if let Some(ref ip) = connection_ip
        && is_valid_ip(ip)
    {
        return ip.clone();
    }

    // 从 X-Forwarded-For 头获取（用于反向代理场景）
    // 只取第一个 IP（最接近客户端的）
    if let Some(forwarded) = req.headers().get("X-Forwarded-For")
        && let Ok(value) = forwarded.to_str()
        && let Some(ip) = value.split(',').next()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    // 从 X-Real-IP 头获取
    if let Some(real_ip) = req.headers().get("X-Real-IP")
        && let Ok(ip) = real_ip.to_str()
    {
        let ip = ip.trim();
        if is_valid_ip(ip) {
            return ip.to_string();
        }
    }

    // 如果都没有有效 IP，使用连接信息的默认值
    connection_ip.unwrap_or_else(|| "unknown".to_string())
}

/// 验证 IP 地址格式是否有效
fn is_valid_ip(ip: &str) -> bool {
    use std::net::IpAddr;
    ip.parse::<IpAddr>().is_ok()
}

/// 已认证请求的身份标识
fn extract_session_identity(req: &ServiceRequest) -> Option<String> {
    use crate::models::auth::SessionUser;
    req.extensions()
        .get::<SessionUser>()
        .map(|user| format!("{}:{}", user.role, user.id))
}

/// 创建速率限制错误响应
fn create_rate_limit_response(retry_after: u64) -> HttpResponse {
    HttpResponse::build(StatusCode::TOO_MANY_REQUESTS)
        .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
        .insert_header(("Retry-After", retry_after.to_string()))
        .insert_header(("X-RateLimit-Remaining", "0"))
        .json(ApiResponse::<()>::error_empty(
            ErrorCode::RateLimitExceeded,
            "Too many requests, please try again later",
        ))
}

impl<S, B> Transform<S, ServiceRequest> for RateLimit
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RateLimitMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddleware {
            service: Rc::new(service),
            max_requests: self.max_requests,
            window_secs: self.window_secs,
            key_prefix: self.key_prefix.clone(),
        }))
    }
}

pub struct RateLimitMiddleware<S> {
    service: Rc<S>,
    max_requests: u32,
    window_secs: u64,
    key_prefix: String,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddleware<S>
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
        let max_requests = self.max_requests;
        let window_secs = self.window_secs;
        let key_prefix = self.key_prefix.clone();

        Box::pin(async move {
            // 构建限制键
            let identifier = extract_session_identity(&req)
                .unwrap_or_else(|| format!("ip:{}", extract_client_ip(&req)));

            let cache_key = if key_prefix.is_empty() {
                identifier
            } else {
                format!("{}:{}", key_prefix, identifier)
            };

            let now = chrono::Utc::now().timestamp();
            let current = RATE_LIMIT_CACHE.get(&cache_key).await;
            let (window, decision) = decide(current, now, max_requests, window_secs);

            let remaining = match decision {
                Decision::Reject { retry_after } => {
                    warn!(
                        "Rate limit exceeded for key: {} ({} requests in window)",
                        cache_key, window.count
                    );
                    return Ok(req.into_response(
                        create_rate_limit_response(retry_after).map_into_right_body(),
                    ));
                }
                Decision::Allow { remaining } => remaining,
            };

            RATE_LIMIT_CACHE.insert(cache_key, window).await;

            req.extensions_mut().insert(RateLimitInfo {
                remaining,
                limit: max_requests,
                reset: (window.started_at + window_secs as i64 - now).max(0) as u64,
            });

            // 继续处理请求
            let res = srv.call(req).await?.map_into_left_body();
            Ok(res)
        })
    }
}

/// 速率限制信息（可在响应中添加）
#[derive(Clone)]
pub struct RateLimitInfo {
    pub remaining: u32,
    pub limit: u32,
    pub reset: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_limit_presets() {
        let login = RateLimit::login();
        assert_eq!(login.max_requests, 5);
        assert_eq!(login.window_secs, 60);
        assert_eq!(login.key_prefix, "login");

        let refresh = RateLimit::refresh_token();
        assert_eq!(refresh.max_requests, 10);
        assert_eq!(refresh.key_prefix, "refresh");
    }

    #[test]
    fn test_sixth_login_in_a_minute_is_rejected() {
        let mut window = None;
        for i in 0..5 {
            let (next, decision) = decide(window, 1_000 + i, 5, 60);
            assert_eq!(
                decision,
                Decision::Allow {
                    remaining: 4 - i as u32
                }
            );
            window = Some(next);
        }

        let (_, decision) = decide(window, 1_010, 5, 60);
        assert_eq!(decision, Decision::Reject { retry_after: 50 });
    }

    #[test]
    fn test_window_resets_after_expiry() {
        let full = Window {
            started_at: 1_000,
            count: 5,
        };
        let (next, decision) = decide(Some(full), 1_060, 5, 60);
        assert_eq!(decision, Decision::Allow { remaining: 4 });
        assert_eq!(next.started_at, 1_060);
        assert_eq!(next.count, 1);
    }
}
