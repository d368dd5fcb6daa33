use crate::app_state::AppState;
use crate::clients::llm::ChatMessage;
use crate::repositories::expense_repository::ExpenseRepository;
use tracing::warn;
use uuid::Uuid;
use walletos_primitives::error::ApiError;
use walletos_primitives::models::entities::expense::Expense;

const FEW_SHOT_LIMIT: i64 = 10;
const FALLBACK_CATEGORY: &str = "Uncategorized";

pub struct CategorizeService;

impl CategorizeService {
    /// Suggests a category for a description using the user's own recent
    /// labels as few-shot examples. The client's timeout bounds the call;
    /// any failure falls back to "Uncategorized", mirroring the budget
    /// analysis fallback.
    pub async fn categorize(
        state: &AppState,
        user_id: Uuid,
        description: &str,
        amount_cents: Option<i64>,
    ) -> Result<String, ApiError> {
        let history = {
            let mut conn = state.db.get().map_err(ApiError::from)?;
            ExpenseRepository::recent_categorized(&mut conn, user_id, FEW_SHOT_LIMIT)?
        };

        let prompt = build_prompt(description, amount_cents, &history);
        let messages = [
            ChatMessage {
                role: "system",
                content: "You label personal expenses. Reply with the category name only, one or two words, no punctuation.",
            },
            ChatMessage {
                role: "user",
                content: &prompt,
            },
        ];

        match state.llm.complete(&messages).await {
            Ok(reply) => Ok(clean_category(&reply)),
            Err(e) => {
                warn!(%user_id, "Categorization failed, using fallback: {}", e);
                Ok(FALLBACK_CATEGORY.to_string())
            }
        }
    }
}

fn build_prompt(description: &str, amount_cents: Option<i64>, history: &[Expense]) -> String {
    let mut prompt = String::new();
    if !history.is_empty() {
        prompt.push_str("Previous labels by this user:\n");
        for e in history {
            prompt.push_str(&format!("- \"{}\" -> {}\n", e.description, e.category));
        }
        prompt.push('\n');
    }
    prompt.push_str(&format!("Categorize: \"{}\"", description));
    if let Some(cents) = amount_cents {
        prompt.push_str(&format!(" ({} cents)", cents));
    }
    prompt
}

/// Model replies sometimes carry quotes, trailing periods, or extra lines.
fn clean_category(reply: &str) -> String {
    let cleaned = reply
        .lines()
        .next()
        .unwrap_or("")
        .trim()
        .trim_matches(|c| c == '"' || c == '\'' || c == '.')
        .trim();
    if cleaned.is_empty() {
        FALLBACK_CATEGORY.to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_replies_are_cleaned() {
        assert_eq!(clean_category("\"Transport\".\n"), "Transport");
        assert_eq!(clean_category("Food\nextra line"), "Food");
        assert_eq!(clean_category("  Dining Out  "), "Dining Out");
    }

    #[test]
    fn empty_reply_falls_back() {
        assert_eq!(clean_category(""), FALLBACK_CATEGORY);
        assert_eq!(clean_category("\"\""), FALLBACK_CATEGORY);
    }

    #[test]
    fn prompt_includes_amount_when_present() {
        let prompt = build_prompt("uber ride", Some(2350), &[]);
        assert!(prompt.contains("uber ride"));
        assert!(prompt.contains("2350 cents"));
    }
}
