use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ForecastService;

pub async fn latest(
    service: &ForecastService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    match storage.get_latest_prediction(user.id).await {
        Ok(Some(prediction)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            prediction,
            "Prediction retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PredictionNotFound,
            "No prediction has been generated yet",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error("Failed to load prediction", e)),
    }
}
