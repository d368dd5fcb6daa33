use crate::models::entities::user::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "alice@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "Alice")]
    pub name: Option<String>,
}

impl LoginRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self.name = self
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Check your inbox for a sign-in link")]
    pub message: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct VerifyQuery {
    pub token: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct VerifyCodeRequest {
    #[schema(example = "alice@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "K7M-3QX")]
    #[validate(length(min = 6))]
    pub code: String,
}

impl VerifyCodeRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: String,
    pub user: User,
}
