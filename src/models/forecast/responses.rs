use serde::Serialize;
use ts_rs::TS;

use super::entities::{ForecastMetrics, ForecastScores, MLPrediction};

/// 即时预测结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/forecast.ts")]
pub struct ForecastResponse {
    pub metrics: ForecastMetrics,
    pub scores: ForecastScores,
    /// 文本生成服务返回的建议，失败时为固定文案
    pub insight: String,
    /// insight 是否来自固定文案
    pub insight_fallback: bool,
    pub prediction: MLPrediction,
}
