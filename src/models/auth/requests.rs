use serde::Deserialize;
use ts_rs::TS;

// 登录请求：学号或工号 + 密码
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/auth.ts")]
pub struct LoginRequest {
    /// 学号 (reg_no) 或工号 (staff_id)
    pub login_id: String,
    pub password: String,
    /// 是否记住我
    #[serde(default)]
    pub remember_me: bool,
}
