use crate::app_state::AppState;
use crate::repositories::expense_repository::{ExpenseRepository, MonthlyExpenseRepository};
use crate::repositories::goal_repository::GoalItemRepository;
use crate::services::reconciler::Reconciler;
use crate::services::sharing_service::SharingService;
use diesel::PgConnection;
use tracing::{info, warn};
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::dtos::expense_dto::{
    CreateExpenseRequest, MonthlyExpenseRequest, UpdateExpenseRequest,
};
use walletos_primitives::models::entities::expense::{Expense, MonthlyExpense, NewExpense, NewMonthlyExpense};

pub struct ExpenseService;

impl ExpenseService {
    pub async fn list(state: &AppState, user_id: Uuid) -> Result<Vec<Expense>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        ExpenseRepository::list_for_user(&mut conn, user_id)
    }

    pub async fn create(
        state: &AppState,
        user_id: Uuid,
        payload: CreateExpenseRequest,
    ) -> Result<Expense, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        validate_goal_linkage(&mut conn, user_id, payload.goal_id, payload.goal_item_id)?;

        let category = resolve_category(
            &mut conn,
            user_id,
            payload.category.as_deref(),
            &payload.description,
            payload.amount_cents,
        );

        let expense = ExpenseRepository::create(
            &mut conn,
            NewExpense {
                user_id,
                description: &payload.description,
                amount_cents: payload.amount_cents,
                category: &category,
                spent_on: payload.spent_on,
                goal_id: payload.goal_id,
                goal_item_id: payload.goal_item_id,
            },
        )?;

        Reconciler::after_expense_change(
            &mut conn,
            None,
            expense.goal_id,
            None,
            expense.goal_item_id,
        )?;

        info!(expense_id = %expense.id, %user_id, "Expense created");
        Ok(expense)
    }

    pub async fn update(
        state: &AppState,
        user_id: Uuid,
        expense_id: Uuid,
        payload: UpdateExpenseRequest,
    ) -> Result<Expense, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let existing = Self::owned_expense(&mut conn, user_id, expense_id)?;

        // Absent patch fields keep the stored value; an explicit null unlinks.
        let goal_id = payload.goal_id.unwrap_or(existing.goal_id);
        let mut goal_item_id = payload.goal_item_id.unwrap_or(existing.goal_item_id);

        // Moving to a different goal drops a stale item linkage unless the
        // patch re-targets the item explicitly.
        if goal_id != existing.goal_id && payload.goal_item_id.is_none() {
            goal_item_id = None;
        }

        validate_goal_linkage(&mut conn, user_id, goal_id, goal_item_id)?;

        let description = payload.description.as_deref().unwrap_or(&existing.description);
        let amount_cents = payload.amount_cents.unwrap_or(existing.amount_cents);
        let category = payload.category.as_deref().unwrap_or(&existing.category);
        let spent_on = payload.spent_on.unwrap_or(existing.spent_on);

        let updated = ExpenseRepository::update(
            &mut conn,
            expense_id,
            description,
            amount_cents,
            category,
            spent_on,
            goal_id,
            goal_item_id,
        )?;

        Reconciler::after_expense_change(
            &mut conn,
            existing.goal_id,
            updated.goal_id,
            existing.goal_item_id,
            updated.goal_item_id,
        )?;

        Ok(updated)
    }

    pub async fn delete(
        state: &AppState,
        user_id: Uuid,
        expense_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;

        let existing = Self::owned_expense(&mut conn, user_id, expense_id)?;
        ExpenseRepository::delete(&mut conn, expense_id)?;

        Reconciler::after_expense_change(
            &mut conn,
            existing.goal_id,
            None,
            existing.goal_item_id,
            None,
        )?;

        info!(%expense_id, %user_id, "Expense deleted");
        Ok(())
    }

    fn owned_expense(
        conn: &mut PgConnection,
        user_id: Uuid,
        expense_id: Uuid,
    ) -> Result<Expense, ApiError> {
        let expense = ExpenseRepository::find_by_id(conn, expense_id)?
            .ok_or_else(|| ApiError::NotFound("Expense not found".into()))?;
        if expense.user_id != user_id {
            // Expenses are private; existence is not disclosed.
            return Err(ApiError::NotFound("Expense not found".into()));
        }
        Ok(expense)
    }
}

/// A supplied `goal_item_id` must come with a `goal_id`, and the item must
/// belong to that goal. A supplied `goal_id` must name a goal the user can
/// contribute to.
fn validate_goal_linkage(
    conn: &mut PgConnection,
    user_id: Uuid,
    goal_id: Option<Uuid>,
    goal_item_id: Option<Uuid>,
) -> Result<(), ApiError> {
    let Some(item_id) = goal_item_id else {
        if let Some(goal_id) = goal_id {
            SharingService::goal_for_mutation(conn, goal_id, user_id)?;
        }
        return Ok(());
    };

    let goal_id = goal_id.ok_or_else(|| {
        ApiError::Validation("goal_item_id requires a goal_id".into())
    })?;

    SharingService::goal_for_mutation(conn, goal_id, user_id)?;

    let item = GoalItemRepository::find_by_id(conn, item_id)?
        .ok_or_else(|| ApiError::Validation("Goal item not found".into()))?;
    if item.goal_id != goal_id {
        return Err(ApiError::Validation(
            "Goal item does not belong to the given goal".into(),
        ));
    }

    Ok(())
}

/// Explicit category wins; otherwise an active recurring template matching
/// name + amount labels the expense; otherwise "Uncategorized". Template
/// lookup failures are logged and swallowed (secondary bookkeeping).
fn resolve_category(
    conn: &mut PgConnection,
    user_id: Uuid,
    category: Option<&str>,
    description: &str,
    amount_cents: i64,
) -> String {
    if let Some(c) = category {
        let trimmed = c.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    match MonthlyExpenseRepository::find_matching(conn, user_id, description, amount_cents) {
        Ok(Some(template)) => template.category,
        Ok(None) => "Uncategorized".to_string(),
        Err(e) => {
            warn!(%user_id, "Recurring template lookup failed: {}", e);
            "Uncategorized".to_string()
        }
    }
}

pub struct MonthlyExpenseService;

impl MonthlyExpenseService {
    pub async fn list(state: &AppState, user_id: Uuid) -> Result<Vec<MonthlyExpense>, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        MonthlyExpenseRepository::list_for_user(&mut conn, user_id)
    }

    pub async fn create(
        state: &AppState,
        user_id: Uuid,
        payload: MonthlyExpenseRequest,
    ) -> Result<MonthlyExpense, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        MonthlyExpenseRepository::create(
            &mut conn,
            NewMonthlyExpense {
                user_id,
                name: &payload.name,
                amount_cents: payload.amount_cents,
                category: payload.category.as_deref().unwrap_or("Uncategorized"),
                active: payload.active,
            },
        )
    }

    pub async fn update(
        state: &AppState,
        user_id: Uuid,
        template_id: Uuid,
        payload: MonthlyExpenseRequest,
    ) -> Result<MonthlyExpense, ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let existing = MonthlyExpenseRepository::find_by_id(&mut conn, template_id)?
            .ok_or_else(|| ApiError::NotFound("Recurring expense not found".into()))?;
        if existing.user_id != user_id {
            return Err(ApiError::NotFound("Recurring expense not found".into()));
        }
        MonthlyExpenseRepository::update(
            &mut conn,
            template_id,
            &payload.name,
            payload.amount_cents,
            payload.category.as_deref().unwrap_or(&existing.category),
            payload.active,
        )
    }

    pub async fn delete(
        state: &AppState,
        user_id: Uuid,
        template_id: Uuid,
    ) -> Result<(), ApiError> {
        let mut conn = state.db.get().map_err(ApiError::from)?;
        let existing = MonthlyExpenseRepository::find_by_id(&mut conn, template_id)?
            .ok_or_else(|| ApiError::NotFound("Recurring expense not found".into()))?;
        if existing.user_id != user_id {
            return Err(ApiError::NotFound("Recurring expense not found".into()));
        }
        MonthlyExpenseRepository::delete(&mut conn, template_id)?;
        Ok(())
    }
}
