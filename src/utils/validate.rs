use once_cell::sync::Lazy;
use regex::Regex;

/// 学号 / 工号：字母数字，可含连字符
static LOGIN_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9-]{3,32}$").expect("Invalid login id regex"));

static COURSE_CODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{2,20}$").expect("Invalid course code regex"));

static FILE_URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9.-]+(:[0-9]{1,5})?(/\S*)?$").expect("Invalid url regex")
});

/// 单次学习时长上限（秒）
pub const MAX_ACTIVITY_SECONDS: i64 = 86_400;

pub fn validate_login_id(login_id: &str) -> Result<(), &'static str> {
    if !LOGIN_ID_RE.is_match(login_id) {
        return Err("Login ID must be 3-32 letters, digits or hyphens");
    }
    Ok(())
}

pub fn validate_course_code(course_code: &str) -> Result<(), &'static str> {
    if !COURSE_CODE_RE.is_match(course_code) {
        return Err("Course code is invalid");
    }
    Ok(())
}

/// 提交地址只接受 http(s)
pub fn validate_file_url(url: &str) -> Result<(), &'static str> {
    if url.len() > 2048 {
        return Err("File URL is too long");
    }
    if !FILE_URL_RE.is_match(url) {
        return Err("File URL must be a valid http(s) link");
    }
    Ok(())
}

/// 0 <= marks <= max_marks
pub fn validate_marks(marks: i32, max_marks: i32) -> Result<(), &'static str> {
    if marks < 0 {
        return Err("Marks cannot be negative");
    }
    if marks > max_marks {
        return Err("Marks cannot exceed the assignment's maximum marks");
    }
    Ok(())
}

pub fn validate_activity_duration(duration_seconds: i64) -> Result<(), &'static str> {
    if !(1..=MAX_ACTIVITY_SECONDS).contains(&duration_seconds) {
        return Err("Duration must be between 1 and 86400 seconds");
    }
    Ok(())
}

pub fn validate_week_number(week_number: i32) -> Result<(), &'static str> {
    if !(1..=52).contains(&week_number) {
        return Err("Week number must be between 1 and 52");
    }
    Ok(())
}

/// 密码策略验证结果
#[derive(Debug, Clone)]
pub struct PasswordValidationResult {
    pub is_valid: bool,
    pub errors: Vec<&'static str>,
}

impl PasswordValidationResult {
    pub fn error_message(&self) -> String {
        self.errors.join("; ")
    }
}

/// 验证密码是否符合安全策略
///
/// 至少 8 个字符，同时包含大小写字母和数字。
pub fn validate_password(password: &str) -> PasswordValidationResult {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one digit");
    }

    PasswordValidationResult {
        is_valid: errors.is_empty(),
        errors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_id() {
        assert!(validate_login_id("9924008001").is_ok());
        assert!(validate_login_id("STAFF-042").is_ok());
        assert!(validate_login_id("ab").is_err());
        assert!(validate_login_id("has space").is_err());
        assert!(validate_login_id("' OR 1=1 --").is_err());
    }

    #[test]
    fn test_validate_course_code() {
        assert!(validate_course_code("CS301").is_ok());
        assert!(validate_course_code("213CSE2301").is_ok());
        assert!(validate_course_code("C").is_err());
        assert!(validate_course_code("CS 301").is_err());
    }

    #[test]
    fn test_validate_file_url() {
        assert!(validate_file_url("https://drive.example.com/file/abc").is_ok());
        assert!(validate_file_url("http://localhost:8080/a.pdf").is_ok());
        assert!(validate_file_url("ftp://example.com/a.pdf").is_err());
        assert!(validate_file_url("javascript:alert(1)").is_err());
        assert!(validate_file_url("https://").is_err());
        assert!(validate_file_url("").is_err());
    }

    #[test]
    fn test_validate_marks_bounds() {
        assert!(validate_marks(0, 100).is_ok());
        assert!(validate_marks(100, 100).is_ok());
        assert!(validate_marks(101, 100).is_err());
        assert!(validate_marks(-1, 100).is_err());
    }

    #[test]
    fn test_validate_activity_duration() {
        assert!(validate_activity_duration(1).is_ok());
        assert!(validate_activity_duration(MAX_ACTIVITY_SECONDS).is_ok());
        assert!(validate_activity_duration(0).is_err());
        assert!(validate_activity_duration(MAX_ACTIVITY_SECONDS + 1).is_err());
    }

    #[test]
    fn test_validate_week_number() {
        assert!(validate_week_number(1).is_ok());
        assert!(validate_week_number(0).is_err());
        assert!(validate_week_number(53).is_err());
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Demo12345").is_valid);
        let weak = validate_password("short");
        assert!(!weak.is_valid);
        assert!(weak.error_message().contains("8 characters"));
    }
}
