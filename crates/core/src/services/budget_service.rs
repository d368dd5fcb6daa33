use crate::app_state::AppState;
use crate::clients::llm::ChatMessage;
use crate::repositories::budget_repository::BudgetRepository;
use crate::repositories::expense_repository::ExpenseRepository;
use crate::repositories::goal_repository::GoalRepository;
use crate::repositories::user_repository::UserRepository;
use chrono::{Datelike, NaiveDate, Utc};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use tracing::warn;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::budget::{BudgetAnalysis, NewBudgetAnalysis};
use walletos_primitives::models::entities::goal::Goal;

pub struct BudgetService;

impl BudgetService {
    /// Builds a month summary, asks the LLM for advice, and persists the
    /// result keyed (user, month). Provider failure degrades into the
    /// deterministic heuristic; the endpoint never hard-fails on the AI
    /// dependency.
    pub async fn analyze(
        state: &AppState,
        user_id: Uuid,
        month: Option<String>,
    ) -> Result<BudgetAnalysis, ApiError> {
        let month = month.unwrap_or_else(current_month);
        let (from, until) = month_bounds(&month)
            .ok_or_else(|| ApiError::Validation("month must be YYYY-MM".into()))?;

        let mut conn = state.db.get().map_err(ApiError::from)?;

        let expenses = ExpenseRepository::list_for_user_in_range(&mut conn, user_id, from, until)?;
        let mut by_category: BTreeMap<String, i64> = BTreeMap::new();
        for e in &expenses {
            *by_category.entry(e.category.clone()).or_insert(0) += e.amount_cents;
        }

        let income = UserRepository::find_by_id(&mut conn, user_id)?
            .and_then(|u| u.monthly_income_cents);
        let goals = GoalRepository::list_owned_by(&mut conn, user_id)?;

        let analysis = match Self::ask_llm(state, &month, income, &by_category, &goals).await {
            Ok(value) => value,
            Err(e) => {
                warn!(%user_id, %month, "LLM analysis failed, using heuristic: {}", e);
                heuristic_analysis(&month, income, &by_category, &goals)
            }
        };

        BudgetRepository::upsert(
            &mut conn,
            NewBudgetAnalysis {
                user_id,
                month: &month,
                analysis,
            },
        )
    }

    async fn ask_llm(
        state: &AppState,
        month: &str,
        income: Option<i64>,
        by_category: &BTreeMap<String, i64>,
        goals: &[Goal],
    ) -> Result<Value, ApiError> {
        let facts = json!({
            "month": month,
            "monthly_income_cents": income,
            "spending_by_category_cents": by_category,
            "goals": goals.iter().map(|g| json!({
                "name": g.name,
                "target_cents": g.target_cents,
                "current_cents": g.current_cents,
                "deadline": g.deadline,
            })).collect::<Vec<_>>(),
        });

        let user_prompt = format!(
            "Analyze this month's budget and reply with JSON only, shaped as \
             {{\"summary\": string, \"recommendations\": [{{\"category\": string, \
             \"current_cents\": int, \"suggested_cents\": int, \"note\": string}}], \
             \"goal_plans\": [{{\"goal\": string, \"monthly_cents\": int}}]}}.\n\n{}",
            facts
        );

        let messages = [
            ChatMessage {
                role: "system",
                content: "You are a frugal personal-finance assistant. Reply with a single JSON object and nothing else.",
            },
            ChatMessage {
                role: "user",
                content: &user_prompt,
            },
        ];

        let reply = state.llm.complete(&messages).await?;
        parse_json_reply(&reply)
            .ok_or_else(|| ApiError::ExternalService("LLM reply was not valid JSON".into()))
    }
}

fn current_month() -> String {
    let now = Utc::now();
    format!("{:04}-{:02}", now.year(), now.month())
}

/// `YYYY-MM` → [first day, first day of next month).
fn month_bounds(month: &str) -> Option<(NaiveDate, NaiveDate)> {
    let (year, month_num) = month.split_once('-')?;
    let year: i32 = year.parse().ok()?;
    let month_num: u32 = month_num.parse().ok()?;

    let from = NaiveDate::from_ymd_opt(year, month_num, 1)?;
    let until = if month_num == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month_num + 1, 1)?
    };
    Some((from, until))
}

/// Providers often wrap JSON in markdown fences; accept both forms.
fn parse_json_reply(reply: &str) -> Option<Value> {
    let trimmed = reply.trim();
    if let Ok(v) = serde_json::from_str(trimmed) {
        return Some(v);
    }
    let inner = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))?
        .strip_suffix("```")?
        .trim();
    serde_json::from_str(inner).ok()
}

/// Deterministic fallback: trim each category by 10% and spread each goal's
/// remaining amount flat over the months until its deadline.
fn heuristic_analysis(
    month: &str,
    income: Option<i64>,
    by_category: &BTreeMap<String, i64>,
    goals: &[Goal],
) -> Value {
    let total: i64 = by_category.values().sum();

    let recommendations: Vec<Value> = by_category
        .iter()
        .map(|(category, &current)| {
            json!({
                "category": category,
                "current_cents": current,
                "suggested_cents": current - current / 10,
                "note": "Reduce by 10%",
            })
        })
        .collect();

    let today = Utc::now().date_naive();
    let goal_plans: Vec<Value> = goals
        .iter()
        .map(|g| {
            let remaining = (g.target_cents - g.current_cents).max(0);
            let months_left = months_between(today, g.deadline).max(1);
            json!({
                "goal": g.name,
                "monthly_cents": remaining / months_left,
            })
        })
        .collect();

    json!({
        "summary": format!(
            "Spent {} cents across {} categories in {}{}",
            total,
            by_category.len(),
            month,
            income
                .map(|i| format!(" against an income of {} cents", i))
                .unwrap_or_default()
        ),
        "recommendations": recommendations,
        "goal_plans": goal_plans,
        "fallback": true,
    })
}

fn months_between(from: NaiveDate, until: NaiveDate) -> i64 {
    let months =
        (until.year() as i64 - from.year() as i64) * 12 + until.month() as i64 - from.month() as i64;
    months.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_bounds_cover_december_rollover() {
        let (from, until) = month_bounds("2026-12").unwrap();
        assert_eq!(from, NaiveDate::from_ymd_opt(2026, 12, 1).unwrap());
        assert_eq!(until, NaiveDate::from_ymd_opt(2027, 1, 1).unwrap());
    }

    #[test]
    fn month_bounds_reject_garbage() {
        assert!(month_bounds("2026").is_none());
        assert!(month_bounds("2026-13").is_none());
        assert!(month_bounds("not-a-month").is_none());
    }

    #[test]
    fn fenced_json_replies_parse() {
        let fenced = "```json\n{\"summary\": \"ok\"}\n```";
        assert_eq!(parse_json_reply(fenced).unwrap()["summary"], "ok");
        assert_eq!(parse_json_reply("{\"a\": 1}").unwrap()["a"], 1);
        assert!(parse_json_reply("no json here").is_none());
    }

    #[test]
    fn heuristic_trims_each_category_by_ten_percent() {
        let mut spend = BTreeMap::new();
        spend.insert("Food".to_string(), 1000_i64);
        spend.insert("Transport".to_string(), 55_i64);

        let value = heuristic_analysis("2026-08", Some(500000), &spend, &[]);
        let recs = value["recommendations"].as_array().unwrap();
        assert_eq!(recs[0]["suggested_cents"], 900);
        assert_eq!(recs[1]["suggested_cents"], 50);
        assert_eq!(value["fallback"], true);
    }

    #[test]
    fn months_between_clamps_past_deadlines() {
        let a = NaiveDate::from_ymd_opt(2026, 8, 1).unwrap();
        let b = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        assert_eq!(months_between(a, b), 0);
        assert_eq!(months_between(b, a), 5);
    }
}
