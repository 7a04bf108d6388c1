use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::attendance::{
    entities::average_attendance,
    responses::{AttendanceItem, AttendanceListResponse},
};

use super::AttendanceService;

pub async fn list_attendance(
    service: &AttendanceService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match crate::services::session_user(request) {
        Ok(user) => user,
        Err(resp) => return Ok(resp),
    };
    let storage = service.get_storage(request)?;

    let records = match storage.list_attendance(user.id).await {
        Ok(records) => records,
        Err(e) => return Ok(ApiResponse::<()>::internal_error("Failed to load attendance", e)),
    };

    let average_percentage = average_attendance(&records);
    let items = records
        .into_iter()
        .map(|record| AttendanceItem {
            effective_percentage: record.effective_percentage(),
            record,
        })
        .collect();

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        AttendanceListResponse {
            items,
            average_percentage,
        },
        "Attendance retrieved successfully",
    )))
}
