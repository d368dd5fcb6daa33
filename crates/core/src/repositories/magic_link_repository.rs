use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::session::{MagicLink, NewMagicLink};
use walletos_primitives::schema::magic_links;

pub struct MagicLinkRepository;

impl MagicLinkRepository {
    pub fn create(
        conn: &mut PgConnection,
        email: &str,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<MagicLink, ApiError> {
        diesel::insert_into(magic_links::table)
            .values(&NewMagicLink {
                email,
                token,
                expires_at,
            })
            .get_result::<MagicLink>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_usable_by_token(
        conn: &mut PgConnection,
        token: &str,
    ) -> Result<Option<MagicLink>, ApiError> {
        magic_links::table
            .filter(magic_links::token.eq(token))
            .filter(magic_links::used.eq(false))
            .filter(magic_links::expires_at.gt(Utc::now()))
            .first::<MagicLink>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// All unused, unexpired links for an email. The OTP code is never
    /// stored, so verification re-derives it from each candidate token.
    pub fn find_usable_by_email(
        conn: &mut PgConnection,
        email: &str,
    ) -> Result<Vec<MagicLink>, ApiError> {
        magic_links::table
            .filter(magic_links::email.eq(email))
            .filter(magic_links::used.eq(false))
            .filter(magic_links::expires_at.gt(Utc::now()))
            .order(magic_links::created_at.desc())
            .load::<MagicLink>(conn)
            .map_err(ApiError::from)
    }

    /// Flips `used` exactly once; a second consumption attempt reports false.
    pub fn consume(conn: &mut PgConnection, link_id: Uuid) -> Result<bool, ApiError> {
        let updated = diesel::update(
            magic_links::table
                .find(link_id)
                .filter(magic_links::used.eq(false)),
        )
        .set(magic_links::used.eq(true))
        .execute(conn)
        .map_err(ApiError::from)?;
        Ok(updated == 1)
    }

    pub fn delete_stale(conn: &mut PgConnection) -> Result<usize, ApiError> {
        diesel::delete(
            magic_links::table.filter(
                magic_links::expires_at
                    .lt(diesel::dsl::now)
                    .or(magic_links::used.eq(true)),
            ),
        )
        .execute(conn)
        .map_err(ApiError::from)
    }
}
