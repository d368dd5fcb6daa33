use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use walletos_core::services::notification_service::NotificationService;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::notification::Notification;

#[utoipa::path(
    get,
    path = "/api/notifications",
    responses((status = 200, description = "Most recent notifications, newest first", body = [Notification])),
    tag = "Notifications"
)]
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    Ok(Json(NotificationService::list(&state, user.id).await?))
}

#[utoipa::path(
    put,
    path = "/api/notifications/{notification_id}/read",
    responses(
        (status = 204, description = "Marked read"),
        (status = 404, description = "Notification not found"),
    ),
    tag = "Notifications"
)]
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(notification_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    NotificationService::mark_read(&state, user.id, notification_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    put,
    path = "/api/notifications/read-all",
    responses((status = 204, description = "All marked read")),
    tag = "Notifications"
)]
pub async fn mark_all_read(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<StatusCode, ApiError> {
    NotificationService::mark_all_read(&state, user.id).await?;
    Ok(StatusCode::NO_CONTENT)
}
