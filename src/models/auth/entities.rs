use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 登录身份
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub enum UserRole {
    Student,
    Teacher,
}

impl UserRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";

    pub fn student_roles() -> &'static [&'static UserRole] {
        &[&Self::Student]
    }
    pub fn teacher_roles() -> &'static [&'static UserRole] {
        &[&Self::Teacher]
    }
    pub fn all_roles() -> &'static [&'static UserRole] {
        &[&Self::Student, &Self::Teacher]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Student => write!(f, "{}", UserRole::STUDENT),
            UserRole::Teacher => write!(f, "{}", UserRole::TEACHER),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            UserRole::STUDENT => Ok(UserRole::Student),
            UserRole::TEACHER => Ok(UserRole::Teacher),
            _ => Err(format!(
                "Invalid user role: '{s}'. Supported roles: student, teacher"
            )),
        }
    }
}

/// 会话中的用户资料
///
/// 学生与教师分表存储，`id` 只在同一角色内唯一，因此总是与 `role` 一起使用。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct SessionUser {
    pub id: i64,
    pub role: UserRole,
    /// 学生为学号 (reg_no)，教师为工号 (staff_id)
    pub login_id: String,
    pub name: String,
    pub email: String,
    /// 是否为演示账号登录
    #[serde(default)]
    pub demo: bool,
}

impl SessionUser {
    /// 生成 token 对（access + refresh）
    pub fn generate_token_pair(
        &self,
        refresh_token_expiry: Option<chrono::TimeDelta>,
    ) -> Result<crate::utils::jwt::TokenPair, String> {
        crate::utils::jwt::JwtUtils::generate_token_pair(self, refresh_token_expiry)
            .map_err(|e| format!("Failed to generate token pair: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        assert_eq!("student".parse::<UserRole>(), Ok(UserRole::Student));
        assert_eq!("teacher".parse::<UserRole>(), Ok(UserRole::Teacher));
        assert_eq!(UserRole::Teacher.to_string(), "teacher");
        assert!("admin".parse::<UserRole>().is_err());
    }

    #[test]
    fn test_role_deserialize_rejects_unknown() {
        let ok: UserRole = serde_json::from_str("\"student\"").unwrap();
        assert_eq!(ok, UserRole::Student);
        assert!(serde_json::from_str::<UserRole>("\"admin\"").is_err());
    }
}
