use axum::routing::{get, post, put};
use axum::{middleware, Router};
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::swagger_config::ApiDoc;
use crate::handlers::{auth, budget, chat, expenses, goals, health, notifications, social, users};
use walletos_core::security::session_middleware;
use walletos_core::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // Public routes (no session required)
    let public_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health::health))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/verify", get(auth::verify_link))
        .route("/api/auth/verify-code", post(auth::verify_code));

    // Protected routes (require a valid x-session-id)
    let protected_router = Router::new()
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/users/me", put(users::update_profile))
        .route(
            "/api/expenses",
            get(expenses::list_expenses).post(expenses::create_expense),
        )
        .route(
            "/api/expenses/{expense_id}",
            put(expenses::update_expense).delete(expenses::delete_expense),
        )
        .route(
            "/api/monthly-expenses",
            get(expenses::list_monthly_expenses).post(expenses::create_monthly_expense),
        )
        .route(
            "/api/monthly-expenses/{template_id}",
            put(expenses::update_monthly_expense).delete(expenses::delete_monthly_expense),
        )
        .route("/api/goals", get(goals::list_goals).post(goals::create_goal))
        .route(
            "/api/goals/{goal_id}",
            get(goals::get_goal)
                .put(goals::update_goal)
                .delete(goals::delete_goal),
        )
        .route(
            "/api/goals/{goal_id}/items",
            get(goals::list_items).post(goals::create_item),
        )
        .route(
            "/api/goals/{goal_id}/items/{item_id}",
            put(goals::update_item).delete(goals::delete_item),
        )
        .route(
            "/api/goals/{goal_id}/chat",
            get(chat::list_messages).post(chat::post_message),
        )
        .route(
            "/api/social/goals/share",
            post(social::share_goal).delete(social::unshare_goal),
        )
        .route("/api/social/goals/share/role", put(social::update_role))
        .route(
            "/api/social/goals/shared-with-me",
            get(social::shared_with_me),
        )
        .route(
            "/api/social/friends/invite-link",
            post(social::create_invite_link),
        )
        .route(
            "/api/social/friends/accept-invite",
            post(social::accept_invite),
        )
        .route("/api/social/friends", get(social::list_friends))
        .route("/api/notifications", get(notifications::list_notifications))
        .route(
            "/api/notifications/{notification_id}/read",
            put(notifications::mark_read),
        )
        .route(
            "/api/notifications/read-all",
            put(notifications::mark_all_read),
        )
        .route("/api/budget/analyze", post(budget::analyze_budget))
        .route("/api/brain/categorize", post(budget::categorize))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    public_router
        .merge(protected_router)
        .with_state(state)
}
