use crate::config::AppConfig;
use crate::models::auth::{SessionUser, UserRole};
use actix_web::cookie::{Cookie, SameSite};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const REFRESH_COOKIE_NAME: &str = "refresh_token";

/// 令牌用途
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Access,
    Refresh,
}

// JWT Claims 结构体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // 学生或教师 ID，需结合 role 使用
    pub role: UserRole,
    pub kind: TokenKind,
    #[serde(default)]
    pub demo: bool, // 演示账号登录
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn user_id(&self) -> Result<i64, jsonwebtoken::errors::Error> {
        self.sub
            .parse::<i64>()
            .map_err(|_| jsonwebtoken::errors::ErrorKind::InvalidSubject.into())
    }
}

// Token 响应结构体
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

pub struct JwtUtils;

impl JwtUtils {
    fn secret() -> &'static str {
        &AppConfig::get().jwt.secret
    }

    /// 签发令牌
    pub fn issue(
        user: &SessionUser,
        kind: TokenKind,
        ttl: chrono::TimeDelta,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        Self::issue_with_secret(Self::secret(), user.id, user.role, user.demo, kind, ttl)
    }

    fn issue_with_secret(
        secret: &str,
        user_id: i64,
        role: UserRole,
        demo: bool,
        kind: TokenKind,
        ttl: chrono::TimeDelta,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            role,
            kind,
            demo,
            exp: (now + ttl).timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// 生成 access + refresh 令牌
    ///
    /// `refresh_ttl` 为空时使用配置中的默认有效期。
    pub fn generate_token_pair(
        user: &SessionUser,
        refresh_ttl: Option<chrono::TimeDelta>,
    ) -> Result<TokenPair, jsonwebtoken::errors::Error> {
        let config = &AppConfig::get().jwt;
        let access_token = Self::issue(
            user,
            TokenKind::Access,
            chrono::TimeDelta::minutes(config.access_token_expiry),
        )?;
        let refresh_token = Self::issue(
            user,
            TokenKind::Refresh,
            refresh_ttl.unwrap_or_else(|| chrono::TimeDelta::days(config.refresh_token_expiry)),
        )?;

        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    /// 验证令牌签名、有效期及用途
    pub fn verify(token: &str, expected: TokenKind) -> Result<Claims, jsonwebtoken::errors::Error> {
        Self::verify_with_secret(Self::secret(), token, expected)
    }

    fn verify_with_secret(
        secret: &str,
        token: &str,
        expected: TokenKind,
    ) -> Result<Claims, jsonwebtoken::errors::Error> {
        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?
        .claims;

        if claims.kind != expected {
            return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
        }
        Ok(claims)
    }

    /// 用 refresh 令牌换取新的 access 令牌
    pub fn refresh_access_token(
        refresh_token: &str,
    ) -> Result<(String, Claims), jsonwebtoken::errors::Error> {
        let claims = Self::verify(refresh_token, TokenKind::Refresh)?;
        let expiry = chrono::TimeDelta::minutes(AppConfig::get().jwt.access_token_expiry);
        let token = Self::issue_with_secret(
            Self::secret(),
            claims.user_id()?,
            claims.role,
            claims.demo,
            TokenKind::Access,
            expiry,
        )?;
        Ok((token, claims))
    }

    /// 创建 Refresh Token Cookie
    pub fn create_refresh_token_cookie(refresh_token: &str, max_age_days: i64) -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE_NAME, refresh_token.to_string())
            .path("/api/v1/auth")
            .max_age(actix_web::cookie::time::Duration::days(max_age_days))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    /// 清空 Refresh Token Cookie（用于注销）
    pub fn create_empty_refresh_token_cookie() -> Cookie<'static> {
        Cookie::build(REFRESH_COOKIE_NAME, "")
            .path("/api/v1/auth")
            .max_age(actix_web::cookie::time::Duration::seconds(0))
            .same_site(SameSite::Strict)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .finish()
    }

    pub fn extract_refresh_token_from_cookie(req: &actix_web::HttpRequest) -> Option<String> {
        req.cookie(REFRESH_COOKIE_NAME)
            .map(|cookie| cookie.value().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_issue_and_verify_access_token() {
        let token = JwtUtils::issue_with_secret(
            SECRET,
            42,
            UserRole::Teacher,
            false,
            TokenKind::Access,
            chrono::TimeDelta::minutes(5),
        )
        .unwrap();

        let claims = JwtUtils::verify_with_secret(SECRET, &token, TokenKind::Access).unwrap();
        assert_eq!(claims.user_id().unwrap(), 42);
        assert_eq!(claims.role, UserRole::Teacher);
        assert!(!claims.demo);
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let token = JwtUtils::issue_with_secret(
            SECRET,
            1,
            UserRole::Student,
            true,
            TokenKind::Refresh,
            chrono::TimeDelta::days(1),
        )
        .unwrap();

        assert!(JwtUtils::verify_with_secret(SECRET, &token, TokenKind::Access).is_err());
        let claims = JwtUtils::verify_with_secret(SECRET, &token, TokenKind::Refresh).unwrap();
        assert!(claims.demo);
    }

    #[test]
    fn test_wrong_secret_and_expired_token_rejected() {
        let token = JwtUtils::issue_with_secret(
            SECRET,
            1,
            UserRole::Student,
            false,
            TokenKind::Access,
            chrono::TimeDelta::minutes(5),
        )
        .unwrap();
        assert!(JwtUtils::verify_with_secret("other", &token, TokenKind::Access).is_err());

        let expired = JwtUtils::issue_with_secret(
            SECRET,
            1,
            UserRole::Student,
            false,
            TokenKind::Access,
            chrono::TimeDelta::minutes(-10),
        )
        .unwrap();
        assert!(JwtUtils::verify_with_secret(SECRET, &expired, TokenKind::Access).is_err());
    }
}
