use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::enum_types::FriendStatus;
use walletos_primitives::models::entities::social::{Friend, Invite, NewFriend, NewInvite};
use walletos_primitives::schema::{friends, invites};

pub struct FriendRepository;

impl FriendRepository {
    /// Accepted pairs are symmetric; either side's row can represent the
    /// edge, so both directions are checked.
    pub fn find_edge(
        conn: &mut PgConnection,
        a: Uuid,
        b: Uuid,
    ) -> Result<Option<Friend>, ApiError> {
        friends::table
            .filter(
                friends::user_id
                    .eq(a)
                    .and(friends::friend_id.eq(b))
                    .or(friends::user_id.eq(b).and(friends::friend_id.eq(a))),
            )
            .first::<Friend>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, edge: NewFriend) -> Result<Friend, ApiError> {
        diesel::insert_into(friends::table)
            .values(&edge)
            .get_result::<Friend>(conn)
            .map_err(ApiError::from)
    }

    pub fn accepted_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<Friend>, ApiError> {
        friends::table
            .filter(
                friends::user_id
                    .eq(user_id)
                    .or(friends::friend_id.eq(user_id)),
            )
            .filter(friends::status.eq(FriendStatus::Accepted))
            .load::<Friend>(conn)
            .map_err(ApiError::from)
    }
}

pub struct InviteRepository;

impl InviteRepository {
    pub fn create(
        conn: &mut PgConnection,
        token: &str,
        creator_id: Uuid,
        expires_at: DateTime<Utc>,
    ) -> Result<Invite, ApiError> {
        diesel::insert_into(invites::table)
            .values(&NewInvite {
                token,
                creator_id,
                expires_at,
            })
            .get_result::<Invite>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_usable(conn: &mut PgConnection, token: &str) -> Result<Option<Invite>, ApiError> {
        invites::table
            .filter(invites::token.eq(token))
            .filter(invites::used.eq(false))
            .filter(invites::expires_at.gt(Utc::now()))
            .first::<Invite>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn consume(conn: &mut PgConnection, invite_id: Uuid) -> Result<bool, ApiError> {
        let updated = diesel::update(
            invites::table
                .find(invite_id)
                .filter(invites::used.eq(false)),
        )
        .set(invites::used.eq(true))
        .execute(conn)
        .map_err(ApiError::from)?;
        Ok(updated == 1)
    }

    pub fn delete_stale(conn: &mut PgConnection) -> Result<usize, ApiError> {
        diesel::delete(
            invites::table.filter(
                invites::expires_at
                    .lt(diesel::dsl::now)
                    .or(invites::used.eq(true)),
            ),
        )
        .execute(conn)
        .map_err(ApiError::from)
    }
}
