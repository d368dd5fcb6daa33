mod common;

use axum::http::StatusCode;
use common::fixtures::{expense_payload, goal_payload, item_payload, linked_expense_payload, unique_email};
use common::{create_test_server, login, try_test_state};
use serde_json::json;
use serial_test::serial;
use uuid::Uuid;
use walletos_core::repositories::goal_repository::GoalRepository;
use walletos_core::services::reconciler::Reconciler;

#[tokio::test]
#[serial]
async fn goal_progress_tracks_linked_expenses() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("progress")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Vacation", 100_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();
    assert_eq!(goal["current_cents"].as_i64(), Some(0));

    // Two linked expenses and one unlinked one
    let expense: serde_json::Value = server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload("Flights", 40_000, &goal_id, None))
        .await
        .json();
    let expense_id = expense["id"].as_str().unwrap().to_string();

    server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload("Hotel deposit", 25_000, &goal_id, None))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&expense_payload("Groceries", 8_000))
        .await
        .assert_status(StatusCode::CREATED);

    let goal: serde_json::Value = server
        .get(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(goal["current_cents"].as_i64(), Some(65_000));

    // Changing a linked amount re-derives the total
    server
        .put(&format!("/api/expenses/{}", expense_id))
        .add_header("x-session-id", &session)
        .json(&json!({ "amount_cents": 45_000 }))
        .await
        .assert_status_ok();

    let goal: serde_json::Value = server
        .get(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(goal["current_cents"].as_i64(), Some(70_000));

    // Deleting a linked expense removes its contribution
    server
        .delete(&format!("/api/expenses/{}", expense_id))
        .add_header("x-session-id", &session)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let goal: serde_json::Value = server
        .get(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(goal["current_cents"].as_i64(), Some(25_000));
}

#[tokio::test]
#[serial]
async fn reconcile_without_new_writes_changes_nothing() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("idempotent")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Steady", 80_000))
        .await
        .json();
    let goal_id: Uuid = goal["id"].as_str().unwrap().parse().unwrap();

    server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload("First deposit", 30_000, &goal_id.to_string(), None))
        .await
        .assert_status(StatusCode::CREATED);

    let mut conn = state.db.get().unwrap();
    let first = Reconciler::reconcile_goal(&mut conn, goal_id).unwrap();
    let second = Reconciler::reconcile_goal(&mut conn, goal_id).unwrap();
    assert_eq!(first, 30_000);
    assert_eq!(second, first);

    let stored = GoalRepository::find_by_id(&mut conn, goal_id).unwrap().unwrap();
    assert_eq!(stored.current_cents, 30_000);
}

#[tokio::test]
#[serial]
async fn item_purchased_follows_linked_expenses() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("items")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("New setup", 200_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();

    let item: serde_json::Value = server
        .post(&format!("/api/goals/{}/items", goal_id))
        .add_header("x-session-id", &session)
        .json(&item_payload("Monitor", 45_000))
        .await
        .json();
    let item_id = item["id"].as_str().unwrap().to_string();
    assert_eq!(item["purchased"].as_bool(), Some(false));

    let expense: serde_json::Value = server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload("Monitor", 45_000, &goal_id, Some(&item_id)))
        .await
        .json();
    let expense_id = expense["id"].as_str().unwrap().to_string();

    let items: serde_json::Value = server
        .get(&format!("/api/goals/{}/items", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(items[0]["purchased"].as_bool(), Some(true));

    // Removing the only referencing expense un-purchases the item
    server
        .delete(&format!("/api/expenses/{}", expense_id))
        .add_header("x-session-id", &session)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let items: serde_json::Value = server
        .get(&format!("/api/goals/{}/items", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(items[0]["purchased"].as_bool(), Some(false));
}

#[tokio::test]
#[serial]
async fn laptop_goal_end_to_end() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("laptop")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Laptop", 120_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();

    let item: serde_json::Value = server
        .post(&format!("/api/goals/{}/items", goal_id))
        .add_header("x-session-id", &session)
        .json(&item_payload("ThinkPad", 120_000))
        .await
        .json();
    let item_id = item["id"].as_str().unwrap().to_string();

    server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload("ThinkPad", 120_000, &goal_id, Some(&item_id)))
        .await
        .assert_status(StatusCode::CREATED);

    let goal: serde_json::Value = server
        .get(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(goal["current_cents"].as_i64(), Some(120_000));
    assert_eq!(goal["target_cents"].as_i64(), Some(120_000));

    let items: serde_json::Value = server
        .get(&format!("/api/goals/{}/items", goal_id))
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(items[0]["purchased"].as_bool(), Some(true));
}

#[tokio::test]
#[serial]
async fn goal_update_null_clears_but_absent_keeps() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("cleared")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Camper van", 500_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();
    assert_eq!(goal["description"].as_str(), Some("test goal"));

    // An update that omits description leaves it untouched
    let updated: serde_json::Value = server
        .put(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .json(&json!({ "name": "Camper van fund", "target_month": "2027-03" }))
        .await
        .json();
    assert_eq!(updated["description"].as_str(), Some("test goal"));
    assert_eq!(updated["target_month"].as_str(), Some("2027-03"));

    // Explicit null clears both nullable fields
    let cleared: serde_json::Value = server
        .put(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .json(&json!({ "description": null, "target_month": null }))
        .await
        .json();
    assert!(cleared["description"].is_null());
    assert!(cleared["target_month"].is_null());
    assert_eq!(cleared["name"].as_str(), Some("Camper van fund"));
}

#[tokio::test]
#[serial]
async fn expense_cannot_link_item_from_another_goal() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("crosslink")).await;

    let goal_a: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Goal A", 50_000))
        .await
        .json();
    let goal_b: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Goal B", 50_000))
        .await
        .json();

    let item_b: serde_json::Value = server
        .post(&format!("/api/goals/{}/items", goal_b["id"].as_str().unwrap()))
        .add_header("x-session-id", &session)
        .json(&item_payload("B thing", 10_000))
        .await
        .json();

    let response = server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload(
            "Crossed wires",
            10_000,
            goal_a["id"].as_str().unwrap(),
            Some(item_b["id"].as_str().unwrap()),
        ))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn expense_item_link_requires_goal_link() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("itemonly")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Goal", 50_000))
        .await
        .json();
    let item: serde_json::Value = server
        .post(&format!("/api/goals/{}/items", goal["id"].as_str().unwrap()))
        .add_header("x-session-id", &session)
        .json(&item_payload("Thing", 10_000))
        .await
        .json();

    let response = server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&json!({
            "description": "Dangling item link",
            "amount_cents": 10_000,
            "spent_on": "2026-08-15",
            "goal_item_id": item["id"].as_str().unwrap()
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn deleting_goal_unlinks_expenses() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("goaldel")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &session)
        .json(&goal_payload("Doomed", 10_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();

    server
        .post("/api/expenses")
        .add_header("x-session-id", &session)
        .json(&linked_expense_payload("Linked", 5_000, &goal_id, None))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .delete(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &session)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // The expense survives, just without the goal link
    let expenses: serde_json::Value = server
        .get("/api/expenses")
        .add_header("x-session-id", &session)
        .await
        .json();
    assert_eq!(expenses.as_array().map(|a| a.len()), Some(1));
    assert!(expenses[0]["goal_id"].is_null());
}
