use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::session::{NewSession, Session};
use walletos_primitives::schema::sessions;

pub struct SessionRepository;

impl SessionRepository {
    pub fn create(
        conn: &mut PgConnection,
        session_id: &str,
        user_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<Session, ApiError> {
        diesel::insert_into(sessions::table)
            .values(&NewSession {
                id: session_id,
                user_id,
                expires_at,
            })
            .get_result::<Session>(conn)
            .map_err(ApiError::from)
    }

    pub fn find(
        conn: &mut PgConnection,
        session_id: &str,
    ) -> Result<Option<Session>, diesel::result::Error> {
        // Returns the raw diesel error so the caller can pattern-match the
        // missing-relation case (migrations not applied).
        sessions::table.find(session_id).first::<Session>(conn).optional()
    }

    /// Idempotent: deleting an unknown session is a no-op.
    pub fn delete(conn: &mut PgConnection, session_id: &str) -> Result<(), ApiError> {
        diesel::delete(sessions::table.find(session_id))
            .execute(conn)
            .map_err(ApiError::from)?;
        Ok(())
    }

    pub fn delete_expired(conn: &mut PgConnection) -> Result<usize, ApiError> {
        diesel::delete(sessions::table.filter(sessions::expires_at.lt(diesel::dsl::now)))
            .execute(conn)
            .map_err(ApiError::from)
    }
}
