use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Pending,
    Graded,
}

impl SubmissionStatus {
    pub const PENDING: &'static str = "Pending";
    pub const GRADED: &'static str = "Graded";
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "{}", Self::PENDING),
            SubmissionStatus::Graded => write!(f, "{}", Self::GRADED),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Self::PENDING => Ok(SubmissionStatus::Pending),
            Self::GRADED => Ok(SubmissionStatus::Graded),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 作业提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub student_id: i64,
    pub file_url: String,
    pub status: SubmissionStatus,
    pub marks_obtained: Option<i32>,
    pub feedback: Option<String>,
    pub graded_by: Option<i64>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
}
