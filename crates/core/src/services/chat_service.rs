use crate::app_state::AppState;
use crate::repositories::chat_repository::ChatRepository;
use crate::services::notification_service::NotificationService;
use crate::services::sharing_service::SharingService;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::social::{ChatMessage, NewChatMessage};

pub struct ChatService;

impl ChatService {
    /// Any participant, viewers included, may read the thread.
    pub async fn list(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        SharingService::goal_for_read(&mut conn, goal_id, user_id)?;
        ChatRepository::list_for_goal(&mut conn, goal_id)
    }

    /// Posting is open to any participant; chat is conversation, not a goal
    /// mutation.
    pub async fn post(
        state: &AppState,
        user_id: Uuid,
        goal_id: Uuid,
        body: &str,
    ) -> Result<ChatMessage, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let goal = SharingService::goal_for_read(&mut conn, goal_id, user_id)?;

        let message = ChatRepository::create(
            &mut conn,
            NewChatMessage {
                goal_id,
                user_id,
                body,
            },
        )?;

        NotificationService::notify_goal_participants(
            &mut conn,
            &goal,
            user_id,
            "chat_message",
            "New message",
            &format!("New message on \"{}\"", goal.name),
        );

        Ok(message)
    }
}
