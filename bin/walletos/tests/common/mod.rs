#![allow(dead_code)]

use axum::Router;
use axum_test::TestServer;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::PgConnection;
use std::sync::Arc;
use walletos_core::app_state::{AppConfig, AppState};
use walletos_core::repositories::magic_link_repository::MagicLinkRepository;
use walletos_primitives::models::entities::user::User;

pub mod fixtures;

/// Integration tests need a live Postgres. When TEST_DATABASE_URL is not set
/// they skip instead of failing, so the suite still passes on machines
/// without a database.
pub fn try_test_state() -> Option<Arc<AppState>> {
    let database_url = std::env::var("TEST_DATABASE_URL").ok()?;

    let manager = ConnectionManager::<PgConnection>::new(&database_url);
    let pool = Pool::builder()
        .max_size(5)
        .build(manager)
        .unwrap_or_else(|e| panic!("Failed to create test database pool: {}", e));

    let config = AppConfig {
        app_url: "http://localhost:8080".to_string(),
        // No mail key: magic links are logged instead of sent, and tests read
        // them straight from the database.
        mail_api_url: "http://localhost:8080/mock/mail".to_string(),
        mail_api_key: None,
        mail_from: "Wallet OS Tests <no-reply@walletos.test>".to_string(),
        // No LLM key: budget analysis and categorization use their
        // deterministic fallbacks.
        llm_api_url: "http://localhost:8080/mock/llm".to_string(),
        llm_api_key: None,
        llm_model: "test-model".to_string(),
        llm_timeout_secs: 1,
        session_ttl_days: 7,
        magic_link_ttl_minutes: 15,
        invite_ttl_days: 7,
    };

    let state = AppState::new(pool, config).expect("Failed to build test AppState");

    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let mut conn = state
            .db
            .get()
            .expect("Failed to get DB connection for migrations");
        run_test_migrations(&mut conn);
    });

    let mut conn = state.db.get().expect("Failed to get DB connection");
    cleanup_test_db(&mut conn);

    Some(state)
}

pub fn create_test_app(state: Arc<AppState>) -> Router {
    walletos_api::app::create_router(state)
}

pub fn create_test_server(state: Arc<AppState>) -> TestServer {
    TestServer::new(create_test_app(state)).expect("Failed to start test server")
}

/// Walk the whole magic-link flow for `email` and return the opened session
/// id plus the user. Tests use this instead of poking session rows in by
/// hand so the auth path stays covered.
pub async fn login(server: &TestServer, state: &Arc<AppState>, email: &str) -> (String, User) {
    use serde_json::json;

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": email }))
        .await;
    response.assert_status_ok();

    // Login normalizes the address, so look the link up the same way
    let mut conn = state.db.get().expect("Failed to get DB connection");
    let link = MagicLinkRepository::find_usable_by_email(&mut conn, email.to_lowercase().trim())
        .expect("Failed to query magic links")
        .into_iter()
        .next()
        .expect("No usable magic link for email");

    let response = server
        .get("/api/auth/verify")
        .add_query_param("token", &link.token)
        .await;
    response.assert_status_ok();

    let body: serde_json::Value = response.json();
    let session_id = body["session_id"]
        .as_str()
        .expect("session_id missing")
        .to_string();
    let user: User = serde_json::from_value(body["user"].clone()).expect("user missing");

    (session_id, user)
}

fn run_test_migrations(conn: &mut PgConnection) {
    use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
    const MIGRATIONS: EmbeddedMigrations = embed_migrations!("../../migrations");

    conn.run_pending_migrations(MIGRATIONS)
        .expect("Failed to run migrations");
}

fn cleanup_test_db(conn: &mut PgConnection) {
    use diesel::sql_query;

    let _ = sql_query(
        "TRUNCATE users, sessions, magic_links, expenses, monthly_expenses, goals, goal_items, \
         shared_goals, notifications, friends, invites, chat_messages, budget_analyses CASCADE",
    )
    .execute(conn);
}
