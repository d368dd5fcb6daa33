use crate::app_state::AppState;
use crate::repositories::notification_repository::NotificationRepository;
use crate::repositories::share_repository::ShareRepository;
use diesel::PgConnection;
use tracing::warn;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::goal::Goal;
use walletos_primitives::models::entities::notification::{NewNotification, Notification};

pub struct NotificationService;

impl NotificationService {
    /// Best-effort: a failed insert is logged and swallowed so it never
    /// blocks the operation that triggered it.
    pub fn notify(
        conn: &mut PgConnection,
        user_id: Uuid,
        kind: &str,
        title: &str,
        message: &str,
        link: Option<&str>,
    ) {
        let result = NotificationRepository::create(
            conn,
            NewNotification {
                user_id,
                kind,
                title,
                message,
                link,
            },
        );
        if let Err(e) = result {
            warn!(%user_id, %kind, "Notification insert failed: {}", e);
        }
    }

    /// Single dispatcher for "notify everyone on this goal except the actor".
    /// Used by goal edits, item changes, and chat messages.
    pub fn notify_goal_participants(
        conn: &mut PgConnection,
        goal: &Goal,
        actor_id: Uuid,
        kind: &str,
        title: &str,
        message: &str,
    ) {
        let link = format!("/goals/{}", goal.id);

        let members = match ShareRepository::members_of_goal(conn, goal.id) {
            Ok(members) => members,
            Err(e) => {
                warn!(goal_id = %goal.id, "Participant lookup failed: {}", e);
                return;
            }
        };

        let mut recipients: Vec<Uuid> = members.into_iter().map(|m| m.user_id).collect();
        recipients.push(goal.user_id);

        for recipient in recipients {
            if recipient == actor_id {
                continue;
            }
            Self::notify(conn, recipient, kind, title, message, Some(&link));
        }
    }

    pub async fn list(state: &AppState, user_id: Uuid) -> Result<Vec<Notification>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        NotificationRepository::list_for_user(&mut conn, user_id)
    }

    pub async fn mark_read(
        state: &AppState,
        user_id: Uuid,
        notification_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let updated = NotificationRepository::mark_read(&mut conn, notification_id, user_id)?;
        if updated == 0 {
            return Err(ApiError::NotFound("Notification not found".into()));
        }
        Ok(())
    }

    pub async fn mark_all_read(state: &AppState, user_id: Uuid) -> Result<usize, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        NotificationRepository::mark_all_read(&mut conn, user_id)
    }
}
