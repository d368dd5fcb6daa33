pub mod app_config;
pub mod dtos;
pub mod entities;

pub use app_config::AppConfig;
