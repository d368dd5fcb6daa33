use axum::extract::State;
use axum::{Extension, Json};
use std::sync::Arc;
use validator::Validate;
use walletos_core::services::budget_service::BudgetService;
use walletos_core::services::categorize_service::CategorizeService;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::budget_dto::{
    AnalyzeBudgetRequest, CategorizeRequest, CategorizeResponse,
};
use walletos_primitives::models::entities::budget::BudgetAnalysis;

#[utoipa::path(
    post,
    path = "/api/budget/analyze",
    request_body = AnalyzeBudgetRequest,
    responses((status = 200, description = "Persisted analysis for (user, month)", body = BudgetAnalysis)),
    tag = "Brain"
)]
pub async fn analyze_budget(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<AnalyzeBudgetRequest>,
) -> Result<Json<BudgetAnalysis>, ApiError> {
    payload.validate()?;
    let analysis = BudgetService::analyze(&state, user.id, payload.month).await?;
    Ok(Json(analysis))
}

#[utoipa::path(
    post,
    path = "/api/brain/categorize",
    request_body = CategorizeRequest,
    responses((status = 200, description = "Suggested category", body = CategorizeResponse)),
    tag = "Brain"
)]
pub async fn categorize(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CategorizeRequest>,
) -> Result<Json<CategorizeResponse>, ApiError> {
    payload.validate()?;
    let category = CategorizeService::categorize(
        &state,
        user.id,
        &payload.description,
        payload.amount_cents,
    )
    .await?;
    Ok(Json(CategorizeResponse { category }))
}
