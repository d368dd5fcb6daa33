use crate::handlers::{
    auth::{__path_login, __path_logout, __path_me, __path_verify_code, __path_verify_link},
    budget::{__path_analyze_budget, __path_categorize},
    chat::{__path_list_messages, __path_post_message},
    expenses::{
        __path_create_expense, __path_create_monthly_expense, __path_delete_expense,
        __path_delete_monthly_expense, __path_list_expenses, __path_list_monthly_expenses,
        __path_update_expense, __path_update_monthly_expense,
    },
    goals::{
        __path_create_goal, __path_create_item, __path_delete_goal, __path_delete_item,
        __path_get_goal, __path_list_goals, __path_list_items, __path_update_goal,
        __path_update_item,
    },
    health::__path_health,
    notifications::{__path_list_notifications, __path_mark_all_read, __path_mark_read},
    social::{
        __path_accept_invite, __path_create_invite_link, __path_list_friends, __path_share_goal,
        __path_shared_with_me, __path_unshare_goal, __path_update_role,
    },
    users::__path_update_profile,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        login, verify_link, verify_code, logout, me, update_profile,
        list_expenses, create_expense, update_expense, delete_expense,
        list_monthly_expenses, create_monthly_expense, update_monthly_expense,
        delete_monthly_expense,
        list_goals, get_goal, create_goal, update_goal, delete_goal,
        list_items, create_item, update_item, delete_item,
        share_goal, update_role, unshare_goal, shared_with_me,
        create_invite_link, accept_invite, list_friends,
        list_messages, post_message,
        list_notifications, mark_read, mark_all_read,
        analyze_budget, categorize,
        health
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Magic-link login and sessions"),
        (name = "Expenses", description = "Expense and recurring-template management"),
        (name = "Goals", description = "Savings goals and their items"),
        (name = "Social", description = "Goal sharing and friends"),
        (name = "Chat", description = "Per-goal message threads"),
        (name = "Notifications", description = "In-app notification feed"),
        (name = "Brain", description = "AI-assisted analysis and categorization"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::new);
        components.security_schemes.insert(
            "sessionId".to_string(),
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("x-session-id"))),
        );
    }
}
