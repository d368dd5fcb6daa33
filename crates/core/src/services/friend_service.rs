use crate::app_state::AppState;
use crate::repositories::friend_repository::{FriendRepository, InviteRepository};
use crate::repositories::user_repository::UserRepository;
use crate::services::auth_service::generate_token;
use crate::services::notification_service::NotificationService;
use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::social_dto::{FriendView, InviteLinkResponse};
use walletos_primitives::models::entities::enum_types::FriendStatus;
use walletos_primitives::models::entities::social::{Friend, NewFriend};

pub struct FriendService;

impl FriendService {
    pub async fn create_invite_link(
        state: &AppState,
        creator_id: Uuid,
    ) -> Result<InviteLinkResponse, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let token = generate_token();
        let expires_at = Utc::now() + Duration::days(state.config.invite_ttl_days);
        InviteRepository::create(&mut conn, &token, creator_id, expires_at)?;

        Ok(InviteLinkResponse {
            url: format!("{}/invite/{}", state.config.app_url, token),
            token,
        })
    }

    /// Consumes the invite exactly once and creates an accepted edge. An
    /// already-connected pair leaves the existing edge in place.
    pub async fn accept_invite(
        state: &AppState,
        user_id: Uuid,
        token: &str,
    ) -> Result<Friend, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let invite = InviteRepository::find_usable(&mut conn, token.trim())?
            .ok_or_else(|| ApiError::NotFound("Invite not found or expired".into()))?;

        if invite.creator_id == user_id {
            return Err(ApiError::Validation(
                "You cannot accept your own invite".into(),
            ));
        }

        if !InviteRepository::consume(&mut conn, invite.id)? {
            return Err(ApiError::NotFound("Invite not found or expired".into()));
        }

        let edge = match FriendRepository::find_edge(&mut conn, invite.creator_id, user_id)? {
            Some(existing) => existing,
            None => FriendRepository::create(
                &mut conn,
                NewFriend {
                    user_id: invite.creator_id,
                    friend_id: user_id,
                    status: FriendStatus::Accepted,
                },
            )?,
        };

        let accepter = UserRepository::find_by_id(&mut conn, user_id)?;
        let name = accepter.map(|u| u.name).unwrap_or_else(|| "Someone".into());
        NotificationService::notify(
            &mut conn,
            invite.creator_id,
            "friend_accepted",
            "Invite accepted",
            &format!("{} accepted your invite", name),
            Some("/friends"),
        );

        info!(creator = %invite.creator_id, accepter = %user_id, "Friend invite accepted");
        Ok(edge)
    }

    pub async fn list_friends(state: &AppState, user_id: Uuid) -> Result<Vec<FriendView>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let edges = FriendRepository::accepted_for_user(&mut conn, user_id)?;

        let mut friends = Vec::with_capacity(edges.len());
        for edge in edges {
            let other = if edge.user_id == user_id {
                edge.friend_id
            } else {
                edge.user_id
            };
            if let Some(user) = UserRepository::find_by_id(&mut conn, other)? {
                friends.push(FriendView { user });
            }
        }
        Ok(friends)
    }
}
