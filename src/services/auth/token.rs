use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::auth::responses::{RefreshTokenResponse, UserInfoResponse};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::jwt;

use super::AuthService;

pub async fn handle_refresh_token(
    service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let config = service.get_config();
    // 从 cookie 中提取 refresh token
    let Some(refresh_token) = jwt::JwtUtils::extract_refresh_token_from_cookie(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized access, please login",
        )));
    };

    match jwt::JwtUtils::refresh_access_token(&refresh_token) {
        Ok((access_token, claims)) => {
            tracing::debug!("Access token refreshed for {} {}", claims.role, claims.sub);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                RefreshTokenResponse {
                    access_token,
                    expires_in: config.jwt.access_token_expiry * 60,
                },
                "Token refreshed successfully",
            )))
        }
        Err(e) => {
            tracing::info!("Refresh token rejected: {}", e);

            // 清除无效的 refresh token cookie
            let empty_cookie = jwt::JwtUtils::create_empty_refresh_token_cookie();

            Ok(HttpResponse::Unauthorized().cookie(empty_cookie).json(
                ApiResponse::error_empty(
                    ErrorCode::Unauthorized,
                    "Login expired or invalid, please login again",
                ),
            ))
        }
    }
}

pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match crate::services::session_user(request) {
        Ok(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "User information retrieved successfully",
        ))),
        Err(resp) => Ok(resp),
    }
}
