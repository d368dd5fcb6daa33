use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AnalyzeBudgetRequest {
    /// Month to analyze, `YYYY-MM`. Defaults to the current month.
    #[schema(example = "2026-08")]
    pub month: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CategorizeRequest {
    #[validate(length(min = 1, max = 255))]
    #[schema(example = "uber ride to the airport")]
    pub description: String,

    #[schema(example = 2350)]
    pub amount_cents: Option<i64>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategorizeResponse {
    #[schema(example = "Transport")]
    pub category: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 120))]
    pub name: Option<String>,

    #[validate(range(min = 0))]
    #[schema(example = 550000)]
    pub monthly_income_cents: Option<i64>,
}
