use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::notification::{NewNotification, Notification};
use walletos_primitives::schema::notifications;

/// Listing cap; the feed is append-only and only the recent window matters.
const LIST_LIMIT: i64 = 50;

pub struct NotificationRepository;

impl NotificationRepository {
    pub fn create(
        conn: &mut PgConnection,
        notification: NewNotification,
    ) -> Result<Notification, ApiError> {
        diesel::insert_into(notifications::table)
            .values(&notification)
            .get_result::<Notification>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Notification>, ApiError> {
        notifications::table
            .filter(notifications::user_id.eq(user_id))
            .order(notifications::created_at.desc())
            .limit(LIST_LIMIT)
            .load::<Notification>(conn)
            .map_err(ApiError::from)
    }

    pub fn mark_read(
        conn: &mut PgConnection,
        notification_id: Uuid,
        user_id: Uuid,
    ) -> Result<usize, ApiError> {
        diesel::update(
            notifications::table
                .find(notification_id)
                .filter(notifications::user_id.eq(user_id)),
        )
        .set(notifications::read.eq(true))
        .execute(conn)
        .map_err(ApiError::from)
    }

    pub fn mark_all_read(conn: &mut PgConnection, user_id: Uuid) -> Result<usize, ApiError> {
        diesel::update(
            notifications::table
                .filter(notifications::user_id.eq(user_id))
                .filter(notifications::read.eq(false)),
        )
        .set(notifications::read.eq(true))
        .execute(conn)
        .map_err(ApiError::from)
    }
}
