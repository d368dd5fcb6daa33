use crate::schema::budget_analyses;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = budget_analyses)]
pub struct BudgetAnalysis {
    pub id: Uuid,
    pub user_id: Uuid,
    pub month: String,
    #[schema(value_type = Object)]
    pub analysis: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = budget_analyses)]
pub struct NewBudgetAnalysis<'a> {
    pub user_id: Uuid,
    pub month: &'a str,
    pub analysis: serde_json::Value,
}
