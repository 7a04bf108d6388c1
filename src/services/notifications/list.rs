use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::ApiResponse;
use crate::models::notifications::{
    requests::NotificationListQuery, responses::NotificationListResponse,
};

use super::NotificationService;

pub async fn list_notifications(
    service: &NotificationService,
    request: &HttpRequest,
    query: NotificationListQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request)?;

    match storage.list_notifications(query.effective_limit()).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            NotificationListResponse { items },
            "Notifications retrieved successfully",
        ))),
        Err(e) => Ok(ApiResponse::<()>::internal_error(
            "Failed to load notifications",
            e,
        )),
    }
}
