use serde::{Deserialize, Deserializer};

/// Distinguishes an absent field from an explicit `null`: absent leaves the
/// stored value alone, `null` clears it.
pub(crate) fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

pub mod auth_dto;
pub mod budget_dto;
pub mod expense_dto;
pub mod goal_dto;
pub mod social_dto;

pub use auth_dto::{LoginRequest, LoginResponse, SessionResponse, VerifyCodeRequest, VerifyQuery};
pub use budget_dto::{
    AnalyzeBudgetRequest, CategorizeRequest, CategorizeResponse, UpdateProfileRequest,
};
pub use expense_dto::{CreateExpenseRequest, MonthlyExpenseRequest, UpdateExpenseRequest};
pub use goal_dto::{
    CreateGoalItemRequest, CreateGoalRequest, UpdateGoalItemRequest, UpdateGoalRequest,
};
pub use social_dto::{
    AcceptInviteRequest, FriendView, InviteLinkResponse, PostChatMessageRequest, ShareGoalRequest,
    SharedGoalView, UnshareRequest, UpdateRoleRequest,
};
