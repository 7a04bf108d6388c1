/// 创建学生（启动时写入演示账号使用）
#[derive(Debug, Clone)]
pub struct CreateStudentRequest {
    pub reg_no: String,
    pub name: String,
    pub email: String,
    /// 已哈希的密码
    pub password_hash: String,
    pub degree: Option<String>,
    pub batch: Option<String>,
    pub section: Option<String>,
    pub cgpa: f64,
    pub earned_credits: i32,
    pub arrears: i32,
}
