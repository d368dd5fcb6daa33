use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;
use walletos_core::services::friend_service::FriendService;
use walletos_core::services::sharing_service::SharingService;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::social_dto::{
    AcceptInviteRequest, FriendView, InviteLinkResponse, ShareGoalRequest, SharedGoalView,
    UnshareRequest, UpdateRoleRequest,
};
use walletos_primitives::models::entities::goal::SharedGoal;
use walletos_primitives::models::entities::social::Friend;

#[utoipa::path(
    post,
    path = "/api/social/goals/share",
    request_body = ShareGoalRequest,
    responses(
        (status = 201, description = "Membership created", body = SharedGoal),
        (status = 403, description = "Only the creator may share"),
        (status = 409, description = "Already shared with this user"),
    ),
    tag = "Social"
)]
pub async fn share_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<ShareGoalRequest>,
) -> Result<(StatusCode, Json<SharedGoal>), ApiError> {
    let membership = SharingService::share_goal(
        &state,
        user.id,
        payload.goal_id,
        payload.user_id,
        payload.role,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(membership)))
}

#[utoipa::path(
    put,
    path = "/api/social/goals/share/role",
    request_body = UpdateRoleRequest,
    responses((status = 200, description = "Role updated", body = SharedGoal)),
    tag = "Social"
)]
pub async fn update_role(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UpdateRoleRequest>,
) -> Result<Json<SharedGoal>, ApiError> {
    let membership = SharingService::update_role(
        &state,
        user.id,
        payload.goal_id,
        payload.user_id,
        payload.role,
    )
    .await?;
    Ok(Json(membership))
}

#[utoipa::path(
    delete,
    path = "/api/social/goals/share",
    request_body = UnshareRequest,
    responses((status = 204, description = "Membership removed")),
    tag = "Social"
)]
pub async fn unshare_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UnshareRequest>,
) -> Result<StatusCode, ApiError> {
    SharingService::unshare(&state, user.id, payload.goal_id, payload.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/social/goals/shared-with-me",
    responses((status = 200, description = "Goals shared with me", body = [SharedGoalView])),
    tag = "Social"
)]
pub async fn shared_with_me(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<SharedGoalView>>, ApiError> {
    Ok(Json(SharingService::shared_with_me(&state, user.id).await?))
}

#[utoipa::path(
    post,
    path = "/api/social/friends/invite-link",
    responses((status = 201, description = "Invite link created", body = InviteLinkResponse)),
    tag = "Social"
)]
pub async fn create_invite_link(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<(StatusCode, Json<InviteLinkResponse>), ApiError> {
    let link = FriendService::create_invite_link(&state, user.id).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

#[utoipa::path(
    post,
    path = "/api/social/friends/accept-invite",
    request_body = AcceptInviteRequest,
    responses(
        (status = 200, description = "Friendship created", body = Friend),
        (status = 404, description = "Invite not found or expired"),
    ),
    tag = "Social"
)]
pub async fn accept_invite(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<AcceptInviteRequest>,
) -> Result<Json<Friend>, ApiError> {
    payload.validate()?;
    let edge = FriendService::accept_invite(&state, user.id, &payload.token).await?;
    Ok(Json(edge))
}

#[utoipa::path(
    get,
    path = "/api/social/friends",
    responses((status = 200, description = "Accepted friends", body = [FriendView])),
    tag = "Social"
)]
pub async fn list_friends(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<FriendView>>, ApiError> {
    Ok(Json(FriendService::list_friends(&state, user.id).await?))
}
