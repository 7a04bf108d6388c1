use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forecast.ts")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            _ => Err(format!("Invalid risk level: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forecast.ts")]
pub enum PerformanceTrend {
    Improving,
    Stable,
    Declining,
}

impl std::fmt::Display for PerformanceTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PerformanceTrend::Improving => write!(f, "Improving"),
            PerformanceTrend::Stable => write!(f, "Stable"),
            PerformanceTrend::Declining => write!(f, "Declining"),
        }
    }
}

impl std::str::FromStr for PerformanceTrend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Improving" => Ok(PerformanceTrend::Improving),
            "Stable" => Ok(PerformanceTrend::Stable),
            "Declining" => Ok(PerformanceTrend::Declining),
            _ => Err(format!("Invalid performance trend: {s}")),
        }
    }
}

/// 预测所需的原始指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forecast.ts")]
pub struct ForecastMetrics {
    pub cgpa: f64,
    pub arrears: i32,
    pub attendance_percentage: f64,
    pub quiz_average: f64,
    pub engagement_hours: f64,
    pub earned_credits: i32,
}

/// 三项百分比得分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forecast.ts")]
pub struct ForecastScores {
    pub success_probability: i32,
    pub risk_index: i32,
    pub improvement_potential: i32,
}

// 预测快照
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forecast.ts")]
pub struct MLPrediction {
    pub id: i64,
    pub student_id: i64,
    pub predicted_gpa: f64,
    pub risk_level: RiskLevel,
    pub performance_trend: PerformanceTrend,
    pub confidence_score: f64,
    pub risk_factors: Vec<String>,
    pub recommendation: String,
    pub success_probability: i32,
    pub risk_index: i32,
    pub improvement_potential: i32,
    pub prediction_date: chrono::DateTime<chrono::Utc>,
}

/// 待写入的预测快照
#[derive(Debug, Clone)]
pub struct NewPrediction {
    pub student_id: i64,
    pub predicted_gpa: f64,
    pub risk_level: RiskLevel,
    pub performance_trend: PerformanceTrend,
    pub confidence_score: f64,
    pub risk_factors: Vec<String>,
    pub recommendation: String,
    pub scores: ForecastScores,
}
