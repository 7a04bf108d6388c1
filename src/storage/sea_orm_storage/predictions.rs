use super::SeaOrmStorage;
use crate::entity::ml_predictions::{ActiveModel, Column, Entity as MlPredictions};
use crate::errors::{PortalError, Result};
use crate::models::forecast::entities::{MLPrediction, NewPrediction};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入预测快照
    pub async fn create_prediction_impl(&self, prediction: NewPrediction) -> Result<MLPrediction> {
        let risk_factors = serde_json::to_string(&prediction.risk_factors)?;

        let model = ActiveModel {
            student_id: Set(prediction.student_id),
            predicted_gpa: Set(prediction.predicted_gpa),
            risk_level: Set(prediction.risk_level.to_string()),
            performance_trend: Set(prediction.performance_trend.to_string()),
            confidence_score: Set(prediction.confidence_score),
            risk_factors: Set(risk_factors),
            recommendation: Set(prediction.recommendation),
            success_probability: Set(prediction.scores.success_probability),
            risk_index: Set(prediction.scores.risk_index),
            improvement_potential: Set(prediction.scores.improvement_potential),
            prediction_date: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("创建预测快照失败: {e}")))?;

        Ok(result.into_prediction())
    }

    /// 最近一次预测快照
    pub async fn get_latest_prediction_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<MLPrediction>> {
        let result = MlPredictions::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_desc(Column::PredictionDate)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| PortalError::database_operation(format!("查询预测快照失败: {e}")))?;

        Ok(result.map(|m| m.into_prediction()))
    }
}
