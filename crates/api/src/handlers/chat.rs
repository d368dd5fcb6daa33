use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;
use walletos_core::services::chat_service::ChatService;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::social_dto::PostChatMessageRequest;
use walletos_primitives::models::entities::social::ChatMessage;

#[utoipa::path(
    get,
    path = "/api/goals/{goal_id}/chat",
    responses(
        (status = 200, description = "Message thread", body = [ChatMessage]),
        (status = 403, description = "Not a participant"),
    ),
    tag = "Chat"
)]
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    Ok(Json(ChatService::list(&state, user.id, goal_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/goals/{goal_id}/chat",
    request_body = PostChatMessageRequest,
    responses(
        (status = 201, description = "Message posted", body = ChatMessage),
        (status = 403, description = "Not a participant"),
    ),
    tag = "Chat"
)]
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<PostChatMessageRequest>,
) -> Result<(StatusCode, Json<ChatMessage>), ApiError> {
    payload.validate()?;
    let message = ChatService::post(&state, user.id, goal_id, &payload.message).await?;
    Ok((StatusCode::CREATED, Json(message)))
}
