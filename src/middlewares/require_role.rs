/*!
 * 基于角色的访问控制中间件
 *
 * 必须在 RequireJWT 之后使用。学生接口只允许 `student`，教师接口只允许 `teacher`。
 *
 * ```rust,ignore
 * web::scope("/api/v1/teacher")
 *     .wrap(RequireRole::new_any(UserRole::teacher_roles()))
 *     .wrap(RequireJWT)
 * ```
 *
 * actix 中后注册的 wrap 先执行，所以 RequireJWT 写在最后。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::models::{
    ErrorCode,
    auth::{SessionUser, UserRole},
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    allowed_roles: Vec<UserRole>,
}

impl RequireRole {
    /// 只允许指定角色
    pub fn new(role: &UserRole) -> Self {
        Self {
            allowed_roles: vec![*role],
        }
    }

    /// 允许任一角色
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            allowed_roles: roles.iter().map(|r| **r).collect(),
        }
    }

    fn allows(&self, role: UserRole) -> bool {
        self.allowed_roles.contains(&role)
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            policy: self.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    policy: RequireRole,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let policy = self.policy.clone();

        Box::pin(async move {
            let user = req
                .extensions()
                .get::<SessionUser>()
                .map(|u| (u.id, u.role));

            match user {
                Some((_, role)) if policy.allows(role) => {
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Some((id, role)) => {
                    info!(
                        "Access denied for {} {} on {}. Allowed roles: {:?}",
                        role,
                        id,
                        req.path(),
                        policy.allowed_roles
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::Forbidden,
                            "Access denied.",
                        )
                        .map_into_right_body(),
                    ))
                }
                None => {
                    info!(
                        "Role check failed: no session user on request. Make sure RequireJWT runs first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_policies() {
        let students = RequireRole::new_any(UserRole::student_roles());
        assert!(students.allows(UserRole::Student));
        assert!(!students.allows(UserRole::Teacher));

        let teachers = RequireRole::new(&UserRole::Teacher);
        assert!(teachers.allows(UserRole::Teacher));
        assert!(!teachers.allows(UserRole::Student));

        let anyone = RequireRole::new_any(UserRole::all_roles());
        assert!(anyone.allows(UserRole::Student) && anyone.allows(UserRole::Teacher));
    }
}
