//! 预测快照实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "ml_predictions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub predicted_gpa: f64,
    pub risk_level: String,
    pub performance_trend: String,
    pub confidence_score: f64,
    /// JSON 字符串数组
    #[sea_orm(column_type = "Text")]
    pub risk_factors: String,
    #[sea_orm(column_type = "Text")]
    pub recommendation: String,
    pub success_probability: i32,
    pub risk_index: i32,
    pub improvement_potential: i32,
    pub prediction_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_prediction(self) -> crate::models::forecast::entities::MLPrediction {
        use crate::models::forecast::entities::{MLPrediction, PerformanceTrend, RiskLevel};
        use chrono::{DateTime, Utc};

        MLPrediction {
            id: self.id,
            student_id: self.student_id,
            predicted_gpa: self.predicted_gpa,
            risk_level: self.risk_level.parse::<RiskLevel>().unwrap_or(RiskLevel::Low),
            performance_trend: self
                .performance_trend
                .parse::<PerformanceTrend>()
                .unwrap_or(PerformanceTrend::Stable),
            confidence_score: self.confidence_score,
            risk_factors: serde_json::from_str(&self.risk_factors).unwrap_or_default(),
            recommendation: self.recommendation,
            success_probability: self.success_probability,
            risk_index: self.risk_index,
            improvement_potential: self.improvement_potential,
            prediction_date: DateTime::<Utc>::from_timestamp(self.prediction_date, 0)
                .unwrap_or_default(),
        }
    }
}
