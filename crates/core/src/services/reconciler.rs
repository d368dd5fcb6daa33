use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::goal_repository::{GoalItemRepository, GoalRepository};
use diesel::PgConnection;
use tracing::debug;
use uuid::Uuid;
use walletos_primitives::error::ApiError;

/// Recomputes a goal's progress from its linked expenses and keeps goal-item
/// purchased flags in sync. This module is the only writer of
/// `goals.current_cents`.
pub struct Reconciler;

impl Reconciler {
    /// `current_cents = Σ amount_cents` over expenses linked to the goal;
    /// no linked expenses means zero. Idempotent: re-running without an
    /// intervening write is a no-op apart from the timestamp.
    pub fn reconcile_goal(conn: &mut PgConnection, goal_id: Uuid) -> Result<i64, ApiError> {
        let total = ExpenseRepository::sum_for_goal(conn, goal_id)?;
        GoalRepository::set_current_cents(conn, goal_id, total)?;
        debug!(%goal_id, current_cents = total, "Goal reconciled");
        Ok(total)
    }

    /// An item is purchased iff at least one expense currently references it.
    pub fn sync_item_purchased(conn: &mut PgConnection, item_id: Uuid) -> Result<(), ApiError> {
        let referenced = ExpenseRepository::count_referencing_item(conn, item_id)? > 0;
        GoalItemRepository::set_purchased(conn, item_id, referenced)?;
        Ok(())
    }

    /// Runs after an expense mutation. `old` and `new` describe the goal and
    /// item linkage before and after; either side may be absent.
    pub fn after_expense_change(
        conn: &mut PgConnection,
        old_goal: Option<Uuid>,
        new_goal: Option<Uuid>,
        old_item: Option<Uuid>,
        new_item: Option<Uuid>,
    ) -> Result<(), ApiError> {
        if let Some(goal_id) = old_goal {
            Self::reconcile_goal(conn, goal_id)?;
        }
        if let Some(goal_id) = new_goal {
            if old_goal != Some(goal_id) {
                Self::reconcile_goal(conn, goal_id)?;
            }
        }

        if let Some(item_id) = old_item {
            if new_item != Some(item_id) {
                Self::sync_item_purchased(conn, item_id)?;
            }
        }
        if let Some(item_id) = new_item {
            Self::sync_item_purchased(conn, item_id)?;
        }

        Ok(())
    }
}
