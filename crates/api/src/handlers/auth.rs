use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;
use walletos_core::security::SESSION_HEADER;
use walletos_core::services::auth_service::AuthService;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::{ApiError, AuthError};
use walletos_primitives::models::dtos::auth_dto::{
    LoginRequest, LoginResponse, SessionResponse, VerifyCodeRequest, VerifyQuery,
};
use walletos_primitives::models::entities::user::User;

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Magic link dispatched", body = LoginResponse),
        (status = 400, description = "Invalid email"),
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    payload.validate()?;
    AuthService::request_login(&state, payload).await?;

    // Same reply whether the account existed or was just created.
    Ok(Json(LoginResponse {
        message: "Check your inbox for a sign-in link".to_string(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/verify",
    params(("token" = String, Query, description = "Magic link token")),
    responses(
        (status = 200, description = "Session opened", body = SessionResponse),
        (status = 401, description = "Invalid or expired token"),
    ),
    tag = "Authentication"
)]
pub async fn verify_link(
    State(state): State<Arc<AppState>>,
    Query(query): Query<VerifyQuery>,
) -> Result<Json<SessionResponse>, ApiError> {
    let (session_id, user) = AuthService::verify_by_link(&state, &query.token).await?;
    Ok(Json(SessionResponse { session_id, user }))
}

#[utoipa::path(
    post,
    path = "/api/auth/verify-code",
    request_body = VerifyCodeRequest,
    responses(
        (status = 200, description = "Session opened", body = SessionResponse),
        (status = 401, description = "Invalid or expired code"),
    ),
    tag = "Authentication"
)]
pub async fn verify_code(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<VerifyCodeRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    payload.validate()?;
    let (session_id, user) = AuthService::verify_by_code(&state, payload).await?;
    Ok(Json(SessionResponse { session_id, user }))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    responses((status = 204, description = "Session deleted")),
    tag = "Authentication"
)]
pub async fn logout(
    State(state): State<Arc<AppState>>,
    headers: axum::http::HeaderMap,
) -> Result<StatusCode, ApiError> {
    let session_id = headers
        .get(SESSION_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AuthError::MissingHeader)?;

    AuthService::logout(&state, session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    responses((status = 200, description = "Current user", body = User)),
    tag = "Authentication"
)]
pub async fn me(Extension(CurrentUser(user)): Extension<CurrentUser>) -> Json<User> {
    Json(user)
}
