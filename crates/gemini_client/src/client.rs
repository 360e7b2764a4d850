use async_trait::async_trait;
use namegen_core::Config;
use reqwest::Client;

use crate::client_trait::GeminiClientTrait;
use crate::error::{GeminiError, Result};
use crate::protocol::{GeminiRequest, GeminiResponse};

/// Google Gemini API client.
///
/// Holds one `reqwest::Client`; each call is independent and stateless,
/// with no retry and no caching. Failures surface once per request.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    /// Create a client from the loaded configuration. An absent
    /// credential becomes an empty key; the service rejects requests
    /// before this client is invoked in that case.
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.api_key.clone().unwrap_or_default(),
            base_url: config.api_base.clone(),
            model: config.model.clone(),
        }
    }

    /// Set a custom base URL (e.g., for proxies or test servers).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model name (e.g., "gemini-1.5-flash").
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

#[async_trait]
impl GeminiClientTrait for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let request = GeminiRequest::single_turn(prompt);

        // Query-param authentication, matching the REST API contract.
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        log::debug!(
            "Gemini generateContent: model={}, prompt_len={}",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(GeminiError::Http)?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.map_err(GeminiError::Http)?;

            if status == 401 || status == 403 {
                return Err(GeminiError::Auth(text));
            }

            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: GeminiResponse = response.json().await.map_err(GeminiError::Http)?;
        let text = body.text();
        log::debug!("Gemini responded with {} chars", text.len());
        Ok(text)
    }
}
