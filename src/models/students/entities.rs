use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    pub id: i64,
    pub reg_no: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub password_hash: String,
    pub aadhar: Option<String>,
    pub degree: Option<String>,
    pub batch: Option<String>,
    pub section: Option<String>,
    pub faculty_advisor: Option<String>,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub nationality: Option<String>,
    pub religion: Option<String>,
    pub community: Option<String>,
    pub caste: Option<String>,
    pub address: Option<String>,
    pub cgpa: f64,
    pub earned_credits: i32,
    pub arrears: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Student {
    /// 转换为会话资料
    pub fn to_session_user(&self, demo: bool) -> crate::models::auth::SessionUser {
        crate::models::auth::SessionUser {
            id: self.id,
            role: crate::models::auth::UserRole::Student,
            login_id: self.reg_no.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            demo,
        }
    }
}
