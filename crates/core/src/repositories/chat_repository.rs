use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::social::{ChatMessage, NewChatMessage};
use walletos_primitives::schema::chat_messages;

pub struct ChatRepository;

impl ChatRepository {
    pub fn list_for_goal(
        conn: &mut PgConnection,
        goal_id: Uuid,
    ) -> Result<Vec<ChatMessage>, ApiError> {
        chat_messages::table
            .filter(chat_messages::goal_id.eq(goal_id))
            .order(chat_messages::created_at.asc())
            .load::<ChatMessage>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        message: NewChatMessage,
    ) -> Result<ChatMessage, ApiError> {
        diesel::insert_into(chat_messages::table)
            .values(&message)
            .get_result::<ChatMessage>(conn)
            .map_err(ApiError::from)
    }
}
