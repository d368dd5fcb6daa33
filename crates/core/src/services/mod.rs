pub mod auth_service;
pub mod budget_service;
pub mod categorize_service;
pub mod chat_service;
pub mod expense_service;
pub mod friend_service;
pub mod goal_service;
pub mod notification_service;
pub mod reconciler;
pub mod sharing_service;
