use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Course {
    pub id: i64,
    pub course_code: String,
    pub course_name: String,
    pub credits: i32,
    pub semester: Option<i32>,
    pub description: Option<String>,
}

// 资料类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub enum MaterialType {
    #[serde(rename = "PDF")]
    Pdf,
    Video,
    Link,
}

impl std::fmt::Display for MaterialType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaterialType::Pdf => write!(f, "PDF"),
            MaterialType::Video => write!(f, "Video"),
            MaterialType::Link => write!(f, "Link"),
        }
    }
}

impl std::str::FromStr for MaterialType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PDF" => Ok(MaterialType::Pdf),
            "Video" => Ok(MaterialType::Video),
            "Link" => Ok(MaterialType::Link),
            _ => Err(format!("Invalid material type: {s}")),
        }
    }
}

// 课程资料
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Material {
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub material_type: MaterialType,
    pub url: String,
    pub week_number: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct Assignment {
    pub id: i64,
    pub course_code: String,
    pub title: String,
    pub description: Option<String>,
    pub max_marks: i32,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
