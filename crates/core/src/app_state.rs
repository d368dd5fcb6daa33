use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{EmailClient, LlmClient};
pub use walletos_primitives::models::app_config::AppConfig;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub http_client: Client,
    pub config: AppConfig,
    pub email: EmailClient,
    pub llm: LlmClient,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let email = EmailClient::new(
            http.clone(),
            &config.mail_api_url,
            config.mail_api_key.clone(),
            config.mail_from.clone(),
        );

        let llm = LlmClient::new(
            Client::builder()
                .timeout(Duration::from_secs(config.llm_timeout_secs))
                .build()?,
            &config.llm_api_url,
            config.llm_api_key.clone(),
            config.llm_model.clone(),
        );

        Ok(Arc::new(Self {
            db,
            http_client: http,
            config,
            email,
            llm,
        }))
    }
}
