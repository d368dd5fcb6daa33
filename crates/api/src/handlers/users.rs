use axum::extract::State;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;
use walletos_core::repositories::user_repository::UserRepository;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::budget_dto::UpdateProfileRequest;
use walletos_primitives::models::entities::user::User;

#[utoipa::path(
    put,
    path = "/api/users/me",
    request_body = UpdateProfileRequest,
    responses((status = 200, description = "Profile updated", body = User)),
    tag = "Users"
)]
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<UpdateProfileRequest>,
) -> Result<Json<User>, ApiError> {
    payload.validate()?;

    let mut conn = state.db.get().map_err(ApiError::from)?;
    let updated = UserRepository::update_profile(
        &mut conn,
        user.id,
        payload.name.as_deref(),
        payload.monthly_income_cents,
    )?;
    Ok(Json(updated))
}
