use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use crate::models::activity::entities::engagement_hours;
use crate::models::attendance::entities::average_attendance;
use crate::models::forecast::{
    entities::{ForecastMetrics, NewPrediction},
    responses::ForecastResponse,
};
use crate::models::quizzes::entities::average_score;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::grades::summary::summarize_semesters;

use super::ForecastService;
use super::heuristic::{
    DataCoverage, compute_scores, confidence_score, performance_trend, predicted_gpa,
    risk_factors, risk_level,
};
use super::insight::build_prompt;

pub async fn generate(
    service: &ForecastService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;
    let insight = service.get_insight(request)?;
    let config = &service.get_config().forecast;

    // 1. 收集指标
    let student = match storage.get_student_by_id(user.id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load student", e)),
    };
    let attendance = match storage.list_attendance(user.id).await {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load attendance", e)),
    };
    let attempts = match storage.list_quiz_attempts(user.id).await {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load quiz attempts", e)),
    };
    let activity_seconds = match storage.total_activity_seconds(user.id).await {
        Ok(total) => total,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load activity", e)),
    };
    let grades = match storage.list_grades(user.id).await {
        Ok(rows) => rows,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load grades", e)),
    };

    let metrics = ForecastMetrics {
        cgpa: student.cgpa,
        arrears: student.arrears,
        attendance_percentage: average_attendance(&attendance),
        quiz_average: average_score(&attempts),
        engagement_hours: engagement_hours(activity_seconds),
        earned_credits: student.earned_credits,
    };
    let coverage = DataCoverage {
        grades: !grades.is_empty(),
        attendance: !attendance.is_empty(),
        quizzes: !attempts.is_empty(),
        activity: activity_seconds > 0,
    };

    // 2. 打分
    let scores = compute_scores(&metrics, config);

    // 3. 建议文本，失败时为固定文案
    let insight = insight.generate(&build_prompt(&metrics, &scores)).await;

    // 4. 保存快照
    let new_prediction = NewPrediction {
        student_id: user.id,
        predicted_gpa: predicted_gpa(metrics.cgpa, scores.success_probability),
        risk_level: risk_level(scores.risk_index),
        performance_trend: performance_trend(&summarize_semesters(&grades)),
        confidence_score: confidence_score(coverage),
        risk_factors: risk_factors(&metrics, config),
        recommendation: insight.text.clone(),
        scores,
    };
    let prediction = match storage.create_prediction(new_prediction).await {
        Ok(prediction) => prediction,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to save prediction", e)),
    };

    info!(
        "Forecast generated for student {}: success {} risk {} improvement {}",
        user.id, scores.success_probability, scores.risk_index, scores.improvement_potential
    );

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ForecastResponse {
            metrics,
            scores,
            insight: insight.text,
            insight_fallback: insight.fallback,
            prediction,
        },
        "Forecast generated successfully",
    )))
}
