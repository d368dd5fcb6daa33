use crate::schema::{expenses, monthly_expenses};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = expenses)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub amount_cents: i64,
    pub category: String,
    pub spent_on: NaiveDate,
    pub goal_id: Option<Uuid>,
    pub goal_item_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = expenses)]
pub struct NewExpense<'a> {
    pub user_id: Uuid,
    pub description: &'a str,
    pub amount_cents: i64,
    pub category: &'a str,
    pub spent_on: NaiveDate,
    pub goal_id: Option<Uuid>,
    pub goal_item_id: Option<Uuid>,
}

/// Recurring-expense template. Used only for matching and labeling; nothing
/// generates future expenses from it.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = monthly_expenses)]
pub struct MonthlyExpense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub amount_cents: i64,
    pub category: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = monthly_expenses)]
pub struct NewMonthlyExpense<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub amount_cents: i64,
    pub category: &'a str,
    pub active: bool,
}
