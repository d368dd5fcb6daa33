use super::double_option;
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGoalRequest {
    #[validate(length(min = 1, max = 120))]
    #[schema(example = "Laptop")]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 1))]
    #[schema(example = 100000)]
    pub target_cents: i64,

    pub deadline: NaiveDate,

    #[schema(example = "2026-09")]
    pub target_month: Option<String>,
}

/// No `current_cents` here: progress is recomputed from linked expenses and
/// is never accepted from a client.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,

    #[validate(range(min = 1))]
    pub target_cents: Option<i64>,

    pub deadline: Option<NaiveDate>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub target_month: Option<Option<String>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateGoalItemRequest {
    #[validate(length(min = 1, max = 120))]
    #[schema(example = "Laptop")]
    pub name: String,

    #[validate(range(min = 1))]
    #[schema(example = 99999)]
    pub price_cents: i64,

    #[validate(range(min = 1))]
    #[serde(default = "default_quantity")]
    pub quantity: i32,

    #[serde(default)]
    pub position: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateGoalItemRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(range(min = 1))]
    pub price_cents: Option<i64>,

    #[validate(range(min = 1))]
    pub quantity: Option<i32>,

    pub position: Option<i32>,
}

fn default_quantity() -> i32 {
    1
}
