use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;
use walletos_core::services::goal_service::GoalService;
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::goal_dto::{
    CreateGoalItemRequest, CreateGoalRequest, UpdateGoalItemRequest, UpdateGoalRequest,
};
use walletos_primitives::models::entities::goal::{Goal, GoalItem};

#[utoipa::path(
    get,
    path = "/api/goals",
    responses((status = 200, description = "Goals created by the user", body = [Goal])),
    tag = "Goals"
)]
pub async fn list_goals(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Goal>>, ApiError> {
    Ok(Json(GoalService::list_owned(&state, user.id).await?))
}

#[utoipa::path(
    get,
    path = "/api/goals/{goal_id}",
    responses(
        (status = 200, description = "Goal", body = Goal),
        (status = 403, description = "Not a participant"),
        (status = 404, description = "Goal not found"),
    ),
    tag = "Goals"
)]
pub async fn get_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Json<Goal>, ApiError> {
    Ok(Json(GoalService::get(&state, user.id, goal_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = CreateGoalRequest,
    responses((status = 201, description = "Goal created", body = Goal)),
    tag = "Goals"
)]
pub async fn create_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateGoalRequest>,
) -> Result<(StatusCode, Json<Goal>), ApiError> {
    payload.validate()?;
    let goal = GoalService::create(&state, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

#[utoipa::path(
    put,
    path = "/api/goals/{goal_id}",
    request_body = UpdateGoalRequest,
    responses(
        (status = 200, description = "Goal updated", body = Goal),
        (status = 403, description = "Viewer or non-participant"),
    ),
    tag = "Goals"
)]
pub async fn update_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<UpdateGoalRequest>,
) -> Result<Json<Goal>, ApiError> {
    payload.validate()?;
    let goal = GoalService::update(&state, user.id, goal_id, payload).await?;
    Ok(Json(goal))
}

#[utoipa::path(
    delete,
    path = "/api/goals/{goal_id}",
    responses(
        (status = 204, description = "Goal deleted"),
        (status = 403, description = "Only the creator may delete"),
    ),
    tag = "Goals"
)]
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    GoalService::delete(&state, user.id, goal_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/goals/{goal_id}/items",
    responses((status = 200, description = "Goal items", body = [GoalItem])),
    tag = "Goals"
)]
pub async fn list_items(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> Result<Json<Vec<GoalItem>>, ApiError> {
    Ok(Json(GoalService::list_items(&state, user.id, goal_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/goals/{goal_id}/items",
    request_body = CreateGoalItemRequest,
    responses((status = 201, description = "Item created", body = GoalItem)),
    tag = "Goals"
)]
pub async fn create_item(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<CreateGoalItemRequest>,
) -> Result<(StatusCode, Json<GoalItem>), ApiError> {
    payload.validate()?;
    let item = GoalService::create_item(&state, user.id, goal_id, payload).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

#[utoipa::path(
    put,
    path = "/api/goals/{goal_id}/items/{item_id}",
    request_body = UpdateGoalItemRequest,
    responses((status = 200, description = "Item updated", body = GoalItem)),
    tag = "Goals"
)]
pub async fn update_item(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path((goal_id, item_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateGoalItemRequest>,
) -> Result<Json<GoalItem>, ApiError> {
    payload.validate()?;
    let item = GoalService::update_item(&state, user.id, goal_id, item_id, payload).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/goals/{goal_id}/items/{item_id}",
    responses((status = 204, description = "Item deleted")),
    tag = "Goals"
)]
pub async fn delete_item(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path((goal_id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    GoalService::delete_item(&state, user.id, goal_id, item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
