pub mod auth;
pub mod budget;
pub mod chat;
pub mod expenses;
pub mod goals;
pub mod health;
pub mod notifications;
pub mod social;
pub mod users;
