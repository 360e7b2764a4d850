use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini authentication failed: {0}. Please check your API key.")]
    Auth(String),

    #[error("Gemini API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, GeminiError>;
