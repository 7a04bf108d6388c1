use serde::Serialize;
use ts_rs::TS;

use super::entities::Student;

/// 仪表盘中的个人信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct StudentProfileResponse {
    pub student: Student,
    /// 国籍/宗教/社群/种姓，缺失字段使用默认值
    pub background: String,
    /// 欢迎语中使用的名字
    pub first_name: String,
}

impl StudentProfileResponse {
    pub fn from_student(student: Student) -> Self {
        let background = format!(
            "{}/{}/{}/{}",
            non_empty_or(&student.nationality, "INDIAN"),
            non_empty_or(&student.religion, "HINDU"),
            non_empty_or(&student.community, "BC"),
            non_empty_or(&student.caste, "N/A"),
        );
        let first_name = student
            .name
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();

        Self {
            student,
            background,
            first_name,
        }
    }
}

fn non_empty_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_student() -> Student {
        Student {
            id: 1,
            reg_no: "9924008001".into(),
            name: "Arun Kumar S".into(),
            email: "arun@example.edu".into(),
            password_hash: String::new(),
            aadhar: None,
            degree: Some("B.Tech CSE".into()),
            batch: None,
            section: None,
            faculty_advisor: None,
            dob: None,
            gender: None,
            nationality: Some("INDIAN".into()),
            religion: None,
            community: Some("  ".into()),
            caste: Some("OC".into()),
            address: None,
            cgpa: 8.2,
            earned_credits: 120,
            arrears: 0,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_background_defaults() {
        let profile = StudentProfileResponse::from_student(sample_student());
        assert_eq!(profile.background, "INDIAN/HINDU/BC/OC");
        assert_eq!(profile.first_name, "Arun");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let mut student = sample_student();
        student.password_hash = "secret-hash".into();
        let json = serde_json::to_string(&student).unwrap();
        assert!(!json.contains("secret-hash"));
    }
}
