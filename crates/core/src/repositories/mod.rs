pub mod budget_repository;
pub mod chat_repository;
pub mod expense_repository;
pub mod friend_repository;
pub mod goal_repository;
pub mod magic_link_repository;
pub mod notification_repository;
pub mod session_repository;
pub mod share_repository;
pub mod user_repository;
