use diesel::prelude::*;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::budget::{BudgetAnalysis, NewBudgetAnalysis};
use walletos_primitives::schema::budget_analyses;

pub struct BudgetRepository;

impl BudgetRepository {
    /// One analysis per (user, month); re-running replaces the stored result.
    pub fn upsert(
        conn: &mut PgConnection,
        analysis: NewBudgetAnalysis,
    ) -> Result<BudgetAnalysis, ApiError> {
        diesel::insert_into(budget_analyses::table)
            .values(&analysis)
            .on_conflict((budget_analyses::user_id, budget_analyses::month))
            .do_update()
            .set((
                budget_analyses::analysis.eq(diesel::upsert::excluded(budget_analyses::analysis)),
                budget_analyses::updated_at.eq(diesel::dsl::now),
            ))
            .get_result::<BudgetAnalysis>(conn)
            .map_err(ApiError::from)
    }
}
