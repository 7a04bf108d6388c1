use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 教师实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/teacher.ts")]
pub struct Teacher {
    pub id: i64,
    pub staff_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password_hash: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Teacher {
    pub fn to_session_user(&self) -> crate::models::auth::SessionUser {
        crate::models::auth::SessionUser {
            id: self.id,
            role: crate::models::auth::UserRole::Teacher,
            login_id: self.staff_id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            demo: false,
        }
    }
}
