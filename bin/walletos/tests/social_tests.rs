mod common;

use axum::http::StatusCode;
use common::fixtures::{goal_payload, unique_email};
use common::{create_test_server, login, try_test_state};
use serde_json::json;
use serial_test::serial;

#[tokio::test]
#[serial]
async fn invite_link_creates_friendship_once() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (inviter_session, inviter) = login(&server, &state, &unique_email("inviter")).await;
    let (friend_session, friend) = login(&server, &state, &unique_email("friend")).await;

    let link: serde_json::Value = server
        .post("/api/social/friends/invite-link")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();
    let token = link["token"].as_str().unwrap().to_string();
    assert!(link["url"].as_str().unwrap().contains(&token));

    server
        .post("/api/social/friends/accept-invite")
        .add_header("x-session-id", &friend_session)
        .json(&json!({ "token": token }))
        .await
        .assert_status_ok();

    // Both sides see the friendship
    let friends: serde_json::Value = server
        .get("/api/social/friends")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();
    assert_eq!(
        friends[0]["user"]["id"].as_str(),
        Some(friend.id.to_string().as_str())
    );

    let friends: serde_json::Value = server
        .get("/api/social/friends")
        .add_header("x-session-id", &friend_session)
        .await
        .json();
    assert_eq!(
        friends[0]["user"]["id"].as_str(),
        Some(inviter.id.to_string().as_str())
    );

    // A spent invite is gone
    let (third_session, _) = login(&server, &state, &unique_email("third")).await;
    let response = server
        .post("/api/social/friends/accept-invite")
        .add_header("x-session-id", &third_session)
        .json(&json!({ "token": token }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
#[serial]
async fn own_invite_cannot_be_accepted() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (session, _) = login(&server, &state, &unique_email("selfinvite")).await;

    let link: serde_json::Value = server
        .post("/api/social/friends/invite-link")
        .add_header("x-session-id", &session)
        .await
        .json();

    let response = server
        .post("/api/social/friends/accept-invite")
        .add_header("x-session-id", &session)
        .json(&json!({ "token": link["token"].as_str().unwrap() }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[serial]
async fn accepting_invite_notifies_the_inviter() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (inviter_session, _) = login(&server, &state, &unique_email("notified")).await;
    let (friend_session, _) = login(&server, &state, &unique_email("accepter")).await;

    let link: serde_json::Value = server
        .post("/api/social/friends/invite-link")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();

    server
        .post("/api/social/friends/accept-invite")
        .add_header("x-session-id", &friend_session)
        .json(&json!({ "token": link["token"].as_str().unwrap() }))
        .await
        .assert_status_ok();

    let notifications: serde_json::Value = server
        .get("/api/notifications")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();
    let kinds: Vec<&str> = notifications
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|n| n["kind"].as_str())
        .collect();
    assert!(kinds.contains(&"friend_accepted"), "got kinds: {:?}", kinds);
}

#[tokio::test]
#[serial]
async fn goal_chat_between_participants() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (owner_session, _) = login(&server, &state, &unique_email("chatowner")).await;
    let (viewer_session, viewer) = login(&server, &state, &unique_email("chatviewer")).await;

    let goal: serde_json::Value = server
        .post("/api/goals")
        .add_header("x-session-id", &owner_session)
        .json(&goal_payload("Chatty goal", 10_000))
        .await
        .json();
    let goal_id = goal["id"].as_str().unwrap().to_string();

    server
        .post("/api/social/goals/share")
        .add_header("x-session-id", &owner_session)
        .json(&json!({ "goal_id": goal_id, "user_id": viewer.id, "role": "viewer" }))
        .await
        .assert_status(StatusCode::CREATED);

    // Viewers can talk even though they cannot edit
    server
        .post(&format!("/api/goals/{}/chat", goal_id))
        .add_header("x-session-id", &viewer_session)
        .json(&json!({ "message": "How close are we?" }))
        .await
        .assert_status(StatusCode::CREATED);

    server
        .post(&format!("/api/goals/{}/chat", goal_id))
        .add_header("x-session-id", &owner_session)
        .json(&json!({ "message": "Almost there" }))
        .await
        .assert_status(StatusCode::CREATED);

    let messages: serde_json::Value = server
        .get(&format!("/api/goals/{}/chat", goal_id))
        .add_header("x-session-id", &owner_session)
        .await
        .json();
    let bodies: Vec<&str> = messages
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|m| m["body"].as_str())
        .collect();
    assert_eq!(bodies, vec!["How close are we?", "Almost there"]);

    // Strangers stay out
    let (stranger_session, _) = login(&server, &state, &unique_email("stranger")).await;
    let response = server
        .get(&format!("/api/goals/{}/chat", goal_id))
        .add_header("x-session-id", &stranger_session)
        .await;
    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
#[serial]
async fn notifications_mark_read_flows() {
    let Some(state) = try_test_state() else {
        eprintln!("Skipping: TEST_DATABASE_URL not set");
        return;
    };
    let server = create_test_server(state.clone());
    let (inviter_session, _) = login(&server, &state, &unique_email("reader")).await;
    let (friend_session, _) = login(&server, &state, &unique_email("sender")).await;

    let link: serde_json::Value = server
        .post("/api/social/friends/invite-link")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();
    server
        .post("/api/social/friends/accept-invite")
        .add_header("x-session-id", &friend_session)
        .json(&json!({ "token": link["token"].as_str().unwrap() }))
        .await
        .assert_status_ok();

    let notifications: serde_json::Value = server
        .get("/api/notifications")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();
    let first = &notifications[0];
    assert_eq!(first["read"].as_bool(), Some(false));

    server
        .put(&format!(
            "/api/notifications/{}/read",
            first["id"].as_str().unwrap()
        ))
        .add_header("x-session-id", &inviter_session)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    let notifications: serde_json::Value = server
        .get("/api/notifications")
        .add_header("x-session-id", &inviter_session)
        .await
        .json();
    assert_eq!(notifications[0]["read"].as_bool(), Some(true));

    server
        .put("/api/notifications/read-all")
        .add_header("x-session-id", &inviter_session)
        .await
        .assert_status(StatusCode::NO_CONTENT);
}
