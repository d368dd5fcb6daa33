use crate::models::entities::enum_types::GoalRole;
use crate::models::entities::goal::Goal;
use crate::models::entities::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ShareGoalRequest {
    pub goal_id: Uuid,
    pub user_id: Uuid,
    #[schema(example = "viewer")]
    pub role: GoalRole,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    pub goal_id: Uuid,
    pub user_id: Uuid,
    pub role: GoalRole,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UnshareRequest {
    pub goal_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SharedGoalView {
    pub goal: Goal,
    pub role: GoalRole,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InviteLinkResponse {
    #[schema(example = "http://localhost:8080/invite/w4kYtR0dNzXq")]
    pub url: String,
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AcceptInviteRequest {
    #[validate(length(min = 1))]
    pub token: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FriendView {
    pub user: User,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct PostChatMessageRequest {
    #[validate(length(min = 1, max = 2000))]
    #[schema(example = "We are halfway there!")]
    pub message: String,
}
