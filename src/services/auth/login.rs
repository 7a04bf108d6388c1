use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::errors::PortalError;
use crate::models::{
    ApiResponse, ErrorCode,
    auth::{LoginRequest, LoginResponse, SessionUser},
};
use crate::storage::Storage;
use crate::utils::jwt;
use crate::utils::password::verify_password;
use crate::utils::validate::validate_login_id;

use super::AuthService;

pub const INVALID_CREDENTIALS: &str = "Invalid Credentials. Check ID or Password.";
pub const CONNECTION_ERROR: &str = "Connection error. Please try again.";

/// 依次匹配学生凭据、教师凭据，演示模式下回退到演示学生
pub(crate) async fn resolve_login(
    storage: &dyn Storage,
    login_id: &str,
    password: &str,
    config: &AppConfig,
) -> Result<Option<SessionUser>, PortalError> {
    let login_id = login_id.trim();

    if let Some(student) = storage.get_student_by_reg_no(login_id).await?
        && verify_password(password, &student.password_hash)
    {
        return Ok(Some(student.to_session_user(false)));
    }

    if let Some(teacher) = storage.get_teacher_by_staff_id(login_id).await?
        && verify_password(password, &teacher.password_hash)
    {
        return Ok(Some(teacher.to_session_user()));
    }

    if config.auth.demo_mode {
        match storage.get_student_by_reg_no(&config.auth.demo_reg_no).await? {
            Some(demo) => return Ok(Some(demo.to_session_user(true))),
            None => warn!(
                "Demo mode enabled but demo student {} does not exist",
                config.auth.demo_reg_no
            ),
        }
    }

    Ok(None)
}

pub async fn handle_login(
    service: &AuthService,
    login_request: LoginRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;
    let config = service.get_config();

    // 格式不合法的账号不会存在，直接按凭据错误处理
    if validate_login_id(login_request.login_id.trim()).is_err() && !config.auth.demo_mode {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::AuthFailed,
            INVALID_CREDENTIALS,
        )));
    }

    // 1. 匹配凭据
    let user = match resolve_login(
        storage.as_ref(),
        &login_request.login_id,
        &login_request.password,
        config,
    )
    .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::AuthFailed,
                INVALID_CREDENTIALS,
            )));
        }
        Err(e) => {
            error!("Login lookup failed: {}", e);
            return Ok(
                HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                    ErrorCode::ConnectionError,
                    CONNECTION_ERROR,
                )),
            );
        }
    };

    // 2. 生成令牌对
    let refresh_days = if login_request.remember_me {
        config.jwt.refresh_token_remember_me_expiry
    } else {
        config.jwt.refresh_token_expiry
    };
    let token_pair = match user.generate_token_pair(Some(chrono::TimeDelta::days(refresh_days))) {
        Ok(pair) => pair,
        Err(e) => {
            error!("Failed to generate JWT token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Login failed, unable to generate token",
                )),
            );
        }
    };

    info!(
        "{} {} logged in successfully{}",
        user.role,
        user.login_id,
        if user.demo { " (demo)" } else { "" }
    );

    let response = LoginResponse {
        access_token: token_pair.access_token,
        expires_in: config.jwt.access_token_expiry * 60, // 转换为秒
        user,
        created_at: chrono::Utc::now(),
    };

    // 3. refresh token 写入 cookie
    let refresh_cookie =
        jwt::JwtUtils::create_refresh_token_cookie(&token_pair.refresh_token, refresh_days);

    Ok(HttpResponse::Ok()
        .cookie(refresh_cookie)
        .json(ApiResponse::success(response, "Login successful")))
}
