use chrono::NaiveDate;
use diesel::prelude::*;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::expense::{
    Expense, MonthlyExpense, NewExpense, NewMonthlyExpense,
};
use walletos_primitives::schema::{expenses, monthly_expenses};

pub struct ExpenseRepository;

impl ExpenseRepository {
    pub fn find_by_id(
        conn: &mut PgConnection,
        expense_id: Uuid,
    ) -> Result<Option<Expense>, ApiError> {
        expenses::table
            .find(expense_id)
            .first::<Expense>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn list_for_user(conn: &mut PgConnection, user_id: Uuid) -> Result<Vec<Expense>, ApiError> {
        expenses::table
            .filter(expenses::user_id.eq(user_id))
            .order(expenses::spent_on.desc())
            .load::<Expense>(conn)
            .map_err(ApiError::from)
    }

    pub fn list_for_user_in_range(
        conn: &mut PgConnection,
        user_id: Uuid,
        from: NaiveDate,
        until: NaiveDate,
    ) -> Result<Vec<Expense>, ApiError> {
        expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::spent_on.ge(from))
            .filter(expenses::spent_on.lt(until))
            .order(expenses::spent_on.desc())
            .load::<Expense>(conn)
            .map_err(ApiError::from)
    }

    pub fn recent_categorized(
        conn: &mut PgConnection,
        user_id: Uuid,
        limit: i64,
    ) -> Result<Vec<Expense>, ApiError> {
        expenses::table
            .filter(expenses::user_id.eq(user_id))
            .filter(expenses::category.ne("Uncategorized"))
            .order(expenses::created_at.desc())
            .limit(limit)
            .load::<Expense>(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_expense: NewExpense) -> Result<Expense, ApiError> {
        diesel::insert_into(expenses::table)
            .values(&new_expense)
            .get_result::<Expense>(conn)
            .map_err(ApiError::from)
    }

    /// Writes the fully merged row; the service resolves the patch against
    /// the existing expense first.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        conn: &mut PgConnection,
        expense_id: Uuid,
        description: &str,
        amount_cents: i64,
        category: &str,
        spent_on: NaiveDate,
        goal_id: Option<Uuid>,
        goal_item_id: Option<Uuid>,
    ) -> Result<Expense, ApiError> {
        diesel::update(expenses::table.find(expense_id))
            .set((
                expenses::description.eq(description),
                expenses::amount_cents.eq(amount_cents),
                expenses::category.eq(category),
                expenses::spent_on.eq(spent_on),
                expenses::goal_id.eq(goal_id),
                expenses::goal_item_id.eq(goal_item_id),
                expenses::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<Expense>(conn)
            .map_err(ApiError::from)
    }

    pub fn delete(conn: &mut PgConnection, expense_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(expenses::table.find(expense_id))
            .execute(conn)
            .map_err(ApiError::from)
    }

    pub fn sum_for_goal(conn: &mut PgConnection, goal_id: Uuid) -> Result<i64, ApiError> {
        expenses::table
            .filter(expenses::goal_id.eq(goal_id))
            .select(diesel::dsl::sql::<diesel::sql_types::Nullable<diesel::sql_types::BigInt>>(
                "SUM(amount_cents)::BIGINT",
            ))
            .first::<Option<i64>>(conn)
            .map(|total| total.unwrap_or(0))
            .map_err(ApiError::from)
    }

    pub fn count_referencing_item(
        conn: &mut PgConnection,
        item_id: Uuid,
    ) -> Result<i64, ApiError> {
        expenses::table
            .filter(expenses::goal_item_id.eq(item_id))
            .count()
            .get_result(conn)
            .map_err(ApiError::from)
    }
}

pub struct MonthlyExpenseRepository;

impl MonthlyExpenseRepository {
    pub fn list_for_user(
        conn: &mut PgConnection,
        user_id: Uuid,
    ) -> Result<Vec<MonthlyExpense>, ApiError> {
        monthly_expenses::table
            .filter(monthly_expenses::user_id.eq(user_id))
            .order(monthly_expenses::created_at.asc())
            .load::<MonthlyExpense>(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        template_id: Uuid,
    ) -> Result<Option<MonthlyExpense>, ApiError> {
        monthly_expenses::table
            .find(template_id)
            .first::<MonthlyExpense>(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(
        conn: &mut PgConnection,
        template: NewMonthlyExpense,
    ) -> Result<MonthlyExpense, ApiError> {
        diesel::insert_into(monthly_expenses::table)
            .values(&template)
            .get_result::<MonthlyExpense>(conn)
            .map_err(ApiError::from)
    }

    pub fn update(
        conn: &mut PgConnection,
        template_id: Uuid,
        name: &str,
        amount_cents: i64,
        category: &str,
        active: bool,
    ) -> Result<MonthlyExpense, ApiError> {
        diesel::update(monthly_expenses::table.find(template_id))
            .set((
                monthly_expenses::name.eq(name),
                monthly_expenses::amount_cents.eq(amount_cents),
                monthly_expenses::category.eq(category),
                monthly_expenses::active.eq(active),
            ))
            .get_result::<MonthlyExpense>(conn)
            .map_err(ApiError::from)
    }

    pub fn delete(conn: &mut PgConnection, template_id: Uuid) -> Result<usize, ApiError> {
        diesel::delete(monthly_expenses::table.find(template_id))
            .execute(conn)
            .map_err(ApiError::from)
    }

    /// Matches a logged expense against the user's active templates by name
    /// and amount. Labeling only; never generates expenses.
    pub fn find_matching(
        conn: &mut PgConnection,
        user_id: Uuid,
        name: &str,
        amount_cents: i64,
    ) -> Result<Option<MonthlyExpense>, ApiError> {
        monthly_expenses::table
            .filter(monthly_expenses::user_id.eq(user_id))
            .filter(monthly_expenses::active.eq(true))
            .filter(monthly_expenses::name.eq(name))
            .filter(monthly_expenses::amount_cents.eq(amount_cents))
            .first::<MonthlyExpense>(conn)
            .optional()
            .map_err(ApiError::from)
    }
}
