use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use walletos_primitives::error::ApiError;

/// Chat-completion client. The inner reqwest client carries a bounded
/// timeout, so a slow provider degrades into the caller's deterministic
/// fallback instead of hanging the request.
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_url: String,
    api_key: Option<SecretString>,
    model: String,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage<'a>],
    temperature: f32,
}

#[derive(Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl LlmClient {
    pub fn new(http: Client, api_url: &str, api_key: Option<SecretString>, model: String) -> Self {
        Self {
            http,
            api_url: api_url.to_string(),
            api_key,
            model,
        }
    }

    /// Sends one chat completion and returns the first choice's content.
    pub async fn complete(&self, messages: &[ChatMessage<'_>]) -> Result<String, ApiError> {
        let key = self
            .api_key
            .as_ref()
            .ok_or_else(|| ApiError::ExternalService("LLM_API_KEY not configured".into()))?;

        let body = ChatRequest {
            model: &self.model,
            messages,
            temperature: 0.2,
        };

        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::ExternalService(format!("LLM request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ApiError::ExternalService(format!(
                "LLM provider returned {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| ApiError::ExternalService(format!("LLM response malformed: {}", e)))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| ApiError::ExternalService("LLM returned no choices".into()))
    }
}
