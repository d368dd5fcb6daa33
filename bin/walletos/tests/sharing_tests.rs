mod common;

use axum::http::StatusCode;
use common::fixtures::{goal_payload, unique_email};
use common::{create_test_server, login, try_test_state};
use serde_json::json;
use serial_test::serial;

async fn shared_goal_setup(
    server: &axum_test::TestServer,
    state: &std::sync::Arc<walletos_core::app_state::AppState>,
    role: &str,
) -> (String, String, String, String) {
    let (owner_session, _) = login(server, state, &unique_email("owner")).await;
    let (member_session, member) = login(server, state, &unique_email("member")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &owner_session)
        .json(&goal_payload("Shared goal", 80_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();

    server
        .post("/api/social/goals/share")
        .add_header("x-session-id", &owner_session)
        .json(&json!({ "goal_id": goal_id, "user_id": member.id, "role": role }))
        .await
        .assert_status(StatusCode::CREATED);

    (owner_session, member_session, goal_id, member.id.to_string())
}

#[tokio::test]
#[serial]
async fn duplicate_share_is_conflict() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (owner_session, _, goal_id, member_id) =
        shared_goal_setup(&server, &state, "viewer").await;

    let response = server
        .post("/api/social/goals/share")
        .add_header("x-session-id", &owner_session)
        .json(&json!({ "goal_id": goal_id, "user_id": member_id, "role": "contributor" }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn sharing_with_the_creator_is_conflict() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (owner_session, owner) = login(&server, &state, &unique_email("selfshare")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &owner_session)
        .json(&goal_payload("Mine", 10_000))
        .await
        .json();

    let response = server
        .post("/api/social/goals/share")
        .add_header("x-session-id", &owner_session)
        .json(&json!({
            "goal_id": goal["id"].as_str().unwrap(),
            "user_id": owner.id,
            "role": "viewer"
        }))
        .await;
    response.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
#[serial]
async fn viewer_can_read_but_not_mutate() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (_, member_session, goal_id, _) = shared_goal_setup(&server, &state, "viewer").await;

    server
        .get(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &member_session)
        .await
        .assert_status_ok();

    let response = server
        .put(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &member_session)
        .json(&json!({ "name": "Hijacked" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn contributor_can_mutate_but_not_delete() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (_, member_session, goal_id, _) =
        shared_goal_setup(&server, &state, "contributor").await;

    server
        .put(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &member_session)
        .json(&json!({ "name": "Renamed by contributor" }))
        .await
        .assert_status_ok();

    // Deletion stays with the creator
    let response = server
        .delete(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &member_session)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn shared_with_me_lists_goal_and_role() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (_, member_session, goal_id, _) = shared_goal_setup(&server, &state, "viewer").await;

    let shared: serde_json::Value = server
        .get("/api/social/goals/shared-with-me")
        .add_header("x-session-id", &member_session)
        .await
        .json();

    assert_eq!(shared.as_array().map(|a| a.len()), Some(1));
    assert_eq!(shared[0]["goal"]["id"].as_str(), Some(goal_id.as_str()));
    assert_eq!(shared[0]["role"].as_str(), Some("viewer"));
}

#[tokio::test]
#[serial]
async fn share_notifies_the_invitee() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (_, member_session, _, _) = shared_goal_setup(&server, &state, "viewer").await;

    let notifications: serde_json::Value = server
        .get("/api/notifications")
        .add_header("x-session-id", &member_session)
        .await
        .json();

    let kinds: Vec<&str> = notifications
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|n| n["kind"].as_str())
        .collect();
    assert!(kinds.contains(&"goal_shared"), "got kinds: {:?}", kinds);
}

#[tokio::test]
#[serial]
async fn item_changes_notify_the_other_members() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (owner_session, member_session, goal_id, _) =
        shared_goal_setup(&server, &state, "contributor").await;

    let item: serde_json::Value = server
        .post(&format!("/api/goals/{}/items", goal_id))
        .add_header("x-session-id", &member_session)
        .json(&json!({ "name": "Tent", "price_cents": 20_000 }))
        .await
        .json();
    let item_id = item["id"].as_str().unwrap().to_string();

    server
        .put(&format!("/api/goals/{}/items/{}", goal_id, item_id))
        .add_header("x-session-id", &member_session)
        .json(&json!({ "name": "Bigger tent" }))
        .await
        .assert_status_ok();

    server
        .delete(&format!("/api/goals/{}/items/{}", goal_id, item_id))
        .add_header("x-session-id", &member_session)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    // Create, rename, and delete each reach the owner; the actor hears nothing
    let owner_feed: serde_json::Value = server
        .get("/api/notifications")
        .add_header("x-session-id", &owner_session)
        .await
        .json();
    let updates = owner_feed
        .as_array()
        .unwrap()
        .iter()
        .filter(|n| n["kind"].as_str() == Some("goal_updated"))
        .count();
    assert_eq!(updates, 3, "got feed: {}", owner_feed);

    let member_feed: serde_json::Value = server
        .get("/api/notifications")
        .add_header("x-session-id", &member_session)
        .await
        .json();
    assert!(member_feed
        .as_array()
        .unwrap()
        .iter()
        .all(|n| n["kind"].as_str() != Some("goal_updated")));
}

#[tokio::test]
#[serial]
async fn unshare_revokes_access() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (owner_session, member_session, goal_id, member_id) =
        shared_goal_setup(&server, &state, "viewer").await;

    server
        .delete("/api/social/goals/share")
        .add_header("x-session-id", &owner_session)
        .json(&json!({ "goal_id": goal_id, "user_id": member_id }))
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let response = server
        .get(&format!("/api/goals/{}", goal_id))
        .add_header("x-session-id", &member_session)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn only_the_creator_manages_sharing() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (_, member_session, goal_id, _) =
        shared_goal_setup(&server, &state, "contributor").await;
    let (_, outsider) = login(&server, &state, &unique_email("outsider")).await;

    // Even a contributor cannot grant access to others
    let response = server
        .post("/api/social/goals/share")
        .add_header("x-session-id", &member_session)
        .json(&json!({ "goal_id": goal_id, "user_id": outsider.id, "role": "viewer" }))
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}
