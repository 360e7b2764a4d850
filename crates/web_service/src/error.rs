use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Provider failures bucketed by the substring heuristic below.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorKind {
    Credential,
    Quota,
    Network,
    Model,
    Generic,
}

impl ProviderErrorKind {
    /// Classify a provider error by its rendered message.
    ///
    /// This is a best-effort heuristic, not a typed contract: the match is
    /// case-sensitive, first bucket wins, and provider message wording is
    /// not stable across provider versions. Unknown messages fall back to
    /// `Generic`.
    pub fn classify(message: &str) -> Self {
        if message.contains("API_KEY") || message.contains("Invalid API key") {
            Self::Credential
        } else if message.contains("quota")
            || message.contains("limit")
            || message.contains("exceeded")
        {
            Self::Quota
        } else if message.contains("network")
            || message.contains("fetch")
            || message.contains("connection")
        {
            Self::Network
        } else if message.contains("model") || message.contains("not found") {
            Self::Model
        } else {
            Self::Generic
        }
    }

    fn user_message(&self) -> &'static str {
        match self {
            Self::Credential => "API key configuration error",
            Self::Quota => "Service temporarily unavailable. Please try again later.",
            Self::Network => "Network error. Please check your connection and try again.",
            Self::Model => "Model configuration error. Please try again.",
            Self::Generic => "Failed to generate name. Please try again.",
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            Self::Credential => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Quota => StatusCode::TOO_MANY_REQUESTS,
            Self::Network => StatusCode::SERVICE_UNAVAILABLE,
            Self::Model => StatusCode::SERVICE_UNAVAILABLE,
            Self::Generic => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Name is required")]
    NameRequired,

    #[error("API configuration error")]
    MissingApiKey,

    #[error("API configuration error")]
    PromptTemplate(#[source] std::io::Error),

    #[error("Model configuration error. Please try again.")]
    EmptyResponse,

    #[error("{}", kind.user_message())]
    Provider {
        kind: ProviderErrorKind,
        /// The raw provider message, kept for the log line only.
        message: String,
    },
}

impl AppError {
    /// Wrap a provider failure, classifying it by message.
    pub fn from_provider(err: gemini_client::GeminiError) -> Self {
        let message = err.to_string();
        let kind = ProviderErrorKind::classify(&message);
        AppError::Provider { kind, message }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NameRequired => StatusCode::BAD_REQUEST,
            AppError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PromptTemplate(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::EmptyResponse => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Provider { kind, .. } => kind.status_code(),
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
