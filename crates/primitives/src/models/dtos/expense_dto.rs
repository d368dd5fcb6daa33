use super::double_option;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateExpenseRequest {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "Groceries at the corner shop")]
    pub description: String,

    #[validate(range(min = 1))]
    #[schema(example = 4250)]
    pub amount_cents: i64,

    #[schema(example = "Food")]
    pub category: Option<String>,

    pub spent_on: NaiveDate,

    pub goal_id: Option<Uuid>,

    /// Requires `goal_id`; the item must belong to that goal.
    pub goal_item_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateExpenseRequest {
    #[validate(length(min = 1, max = 255))]
    pub description: Option<String>,

    #[validate(range(min = 1))]
    pub amount_cents: Option<i64>,

    pub category: Option<String>,

    pub spent_on: Option<NaiveDate>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub goal_id: Option<Option<Uuid>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub goal_item_id: Option<Option<Uuid>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct MonthlyExpenseRequest {
    #[validate(length(min = 1, max = 120))]
    #[schema(example = "Rent")]
    pub name: String,

    #[validate(range(min = 1))]
    #[schema(example = 120000)]
    pub amount_cents: i64,

    #[schema(example = "Housing")]
    pub category: Option<String>,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}
