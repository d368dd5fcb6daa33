use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;
use walletos_core::services::expense_service::{ExpenseService, MonthlyExpenseService};
use walletos_core::{AppState, CurrentUser};
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::expense_dto::{
    CreateExpenseRequest, MonthlyExpenseRequest, UpdateExpenseRequest,
};
use walletos_primitives::models::entities::expense::{Expense, MonthlyExpense};

#[utoipa::path(
    get,
    path = "/api/expenses",
    responses((status = 200, description = "User's expenses", body = [Expense])),
    tag = "Expenses"
)]
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<Expense>>, ApiError> {
    Ok(Json(ExpenseService::list(&state, user.id).await?))
}

#[utoipa::path(
    post,
    path = "/api/expenses",
    request_body = CreateExpenseRequest,
    responses(
        (status = 201, description = "Expense created", body = Expense),
        (status = 400, description = "Invalid goal/item linkage"),
    ),
    tag = "Expenses"
)]
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<CreateExpenseRequest>,
) -> Result<(StatusCode, Json<Expense>), ApiError> {
    payload.validate()?;
    let expense = ExpenseService::create(&state, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    put,
    path = "/api/expenses/{expense_id}",
    request_body = UpdateExpenseRequest,
    responses(
        (status = 200, description = "Expense updated", body = Expense),
        (status = 404, description = "Expense not found"),
    ),
    tag = "Expenses"
)]
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(expense_id): Path<Uuid>,
    Json(payload): Json<UpdateExpenseRequest>,
) -> Result<Json<Expense>, ApiError> {
    payload.validate()?;
    let expense = ExpenseService::update(&state, user.id, expense_id, payload).await?;
    Ok(Json(expense))
}

#[utoipa::path(
    delete,
    path = "/api/expenses/{expense_id}",
    responses(
        (status = 204, description = "Expense deleted"),
        (status = 404, description = "Expense not found"),
    ),
    tag = "Expenses"
)]
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(expense_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ExpenseService::delete(&state, user.id, expense_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/monthly-expenses",
    responses((status = 200, description = "Recurring templates", body = [MonthlyExpense])),
    tag = "Expenses"
)]
pub async fn list_monthly_expenses(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Vec<MonthlyExpense>>, ApiError> {
    Ok(Json(MonthlyExpenseService::list(&state, user.id).await?))
}

#[utoipa::path(
    post,
    path = "/api/monthly-expenses",
    request_body = MonthlyExpenseRequest,
    responses((status = 201, description = "Template created", body = MonthlyExpense)),
    tag = "Expenses"
)]
pub async fn create_monthly_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(payload): Json<MonthlyExpenseRequest>,
) -> Result<(StatusCode, Json<MonthlyExpense>), ApiError> {
    payload.validate()?;
    let template = MonthlyExpenseService::create(&state, user.id, payload).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

#[utoipa::path(
    put,
    path = "/api/monthly-expenses/{template_id}",
    request_body = MonthlyExpenseRequest,
    responses((status = 200, description = "Template updated", body = MonthlyExpense)),
    tag = "Expenses"
)]
pub async fn update_monthly_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(template_id): Path<Uuid>,
    Json(payload): Json<MonthlyExpenseRequest>,
) -> Result<Json<MonthlyExpense>, ApiError> {
    payload.validate()?;
    let template = MonthlyExpenseService::update(&state, user.id, template_id, payload).await?;
    Ok(Json(template))
}

#[utoipa::path(
    delete,
    path = "/api/monthly-expenses/{template_id}",
    responses((status = 204, description = "Template deleted")),
    tag = "Expenses"
)]
pub async fn delete_monthly_expense(
    State(state): State<Arc<AppState>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(template_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    MonthlyExpenseService::delete(&state, user.id, template_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
