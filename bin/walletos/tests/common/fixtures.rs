#![allow(dead_code)]

use serde_json::{json, Value};
use uuid::Uuid;

pub fn unique_email(prefix: &str) -> String {
    format!("{}+{}@example.com", prefix, Uuid::new_v4())
}

pub fn goal_payload(name: &str, target_cents: i64) -> Value {
    json!({
        "name": name,
        "description": "test goal",
        "target_cents": target_cents,
        "deadline": "2027-06-30"
    })
}

pub fn item_payload(name: &str, price_cents: i64) -> Value {
    json!({
        "name": name,
        "price_cents": price_cents,
        "quantity": 1,
        "position": 0
    })
}

pub fn expense_payload(description: &str, amount_cents: i64) -> Value {
    json!({
        "description": description,
        "amount_cents": amount_cents,
        "category": "General",
        "spent_on": "2026-08-15"
    })
}

pub fn linked_expense_payload(
    description: &str,
    amount_cents: i64,
    goal_id: &str,
    goal_item_id: Option<&str>,
) -> Value {
    let mut payload = json!({
        "description": description,
        "amount_cents": amount_cents,
        "category": "General",
        "spent_on": "2026-08-15",
        "goal_id": goal_id
    });
    if let Some(item_id) = goal_item_id {
        payload["goal_item_id"] = json!(item_id);
    }
    payload
}
