use eyre::Report;
use secrecy::SecretString;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Public base URL used to build magic-link URLs in outgoing mail.
    pub app_url: String,

    /// Mail provider key. When absent, magic links are logged to the console
    /// instead of delivered, which is how local environments run.
    pub mail_api_url: String,
    pub mail_api_key: Option<SecretString>,
    pub mail_from: String,

    /// Chat-completion provider for budget analysis and categorization.
    pub llm_api_url: String,
    pub llm_api_key: Option<SecretString>,
    pub llm_model: String,
    pub llm_timeout_secs: u64,

    pub session_ttl_days: i64,
    pub magic_link_ttl_minutes: i64,
    pub invite_ttl_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            mail_api_url: env::var("MAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com/emails".into()),
            mail_api_key: env::var("MAIL_API_KEY").ok().map(SecretString::from),
            mail_from: env::var("MAIL_FROM")
                .unwrap_or_else(|_| "Wallet OS <no-reply@walletos.app>".into()),

            llm_api_url: env::var("LLM_API_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1/chat/completions".into()),
            llm_api_key: env::var("LLM_API_KEY").ok().map(SecretString::from),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| "gpt-4o-mini".into()),
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "15".into())
                .parse()?,

            session_ttl_days: 7,
            magic_link_ttl_minutes: 15,
            invite_ttl_days: 7,
        })
    }
}
