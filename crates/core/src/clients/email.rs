use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use walletos_primitives::error::ApiError;

/// Outbound mail. Without a provider key (local/dev environments) the message
/// is logged instead of delivered, so magic links stay usable from the
/// console.
#[derive(Clone)]
pub struct EmailClient {
    http: Client,
    api_url: String,
    api_key: Option<SecretString>,
    from: String,
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    text: &'a str,
}

impl EmailClient {
    pub fn new(http: Client, api_url: &str, api_key: Option<SecretString>, from: String) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            api_key,
            from,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn send_email(&self, to: &str, subject: &str, body: &str) -> Result<(), ApiError> {
        let Some(key) = self.api_key.as_ref() else {
            tracing::info!(%to, %subject, "MAIL_API_KEY not set; mail body follows:\n{}", body);
            return Ok(());
        };

        let payload = SendEmailRequest {
            from: &self.from,
            to: [to],
            subject,
            text: body,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(key.expose_secret())
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::ExternalService(format!("Mail request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::ExternalService(format!(
                "Mail provider returned {}",
                response.status()
            )));
        }

        tracing::info!(%to, %subject, from = %self.from, "Email dispatched");
        Ok(())
    }
}
