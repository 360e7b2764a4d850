//! HTTP client for the name-generation service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned HTTP {status}: {message}")]
    Service { status: u16, message: String },
}

#[derive(Serialize)]
struct GenerateNameRequest<'a> {
    name: &'a str,
}

#[derive(Deserialize)]
struct GenerateNameResponse {
    #[serde(rename = "generatedName")]
    generated_name: String,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: String,
}

/// One request per submit action; no retry, no de-duplication.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST the trimmed name and return the generated text.
    pub async fn generate(&self, name: &str) -> Result<String, ApiError> {
        let url = format!("{}/generate-name", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&GenerateNameRequest { name })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            log::warn!("generate failed: HTTP {status}: {}", body.error);
            return Err(ApiError::Service {
                status: status.as_u16(),
                message: body.error,
            });
        }

        let body: GenerateNameResponse = response.json().await?;
        Ok(body.generated_name)
    }
}
