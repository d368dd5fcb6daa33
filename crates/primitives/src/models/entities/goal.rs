use crate::models::entities::enum_types::GoalRole;
use crate::schema::{goal_items, goals, shared_goals};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

/// `current_cents` is a projection of the linked expenses. The reconciler is
/// its only writer; it is never accepted from a client.
#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Serialize, ToSchema)]
#[diesel(table_name = goals)]
pub struct Goal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_cents: i64,
    pub current_cents: i64,
    pub deadline: NaiveDate,
    pub target_month: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = goals)]
pub struct NewGoal<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub target_cents: i64,
    pub deadline: NaiveDate,
    pub target_month: Option<&'a str>,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, ToSchema)]
#[diesel(belongs_to(Goal))]
#[diesel(table_name = goal_items)]
pub struct GoalItem {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub name: String,
    pub price_cents: i64,
    pub quantity: i32,
    pub purchased: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = goal_items)]
pub struct NewGoalItem<'a> {
    pub goal_id: Uuid,
    pub name: &'a str,
    pub price_cents: i64,
    pub quantity: i32,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize, ToSchema)]
#[diesel(belongs_to(Goal))]
#[diesel(table_name = shared_goals)]
pub struct SharedGoal {
    pub id: Uuid,
    pub goal_id: Uuid,
    pub user_id: Uuid,
    pub role: GoalRole,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = shared_goals)]
pub struct NewSharedGoal {
    pub goal_id: Uuid,
    pub user_id: Uuid,
    pub role: GoalRole,
}
