use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_PROMPT_PATH: &str = "prompts/wu_tang_prompt.txt";
pub const DEFAULT_PAGE_URL: &str = "http://localhost:8080";
pub const DEFAULT_PORT: u16 = 8080;

/// Process-wide configuration, read from environment variables.
///
/// The only value without a usable default is the provider credential;
/// a missing credential is reported per request by the service rather
/// than preventing startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Gemini API key (`GOOGLE_API_KEY`).
    pub api_key: Option<String>,
    /// Provider endpoint base (`GEMINI_API_BASE`).
    pub api_base: String,
    /// Model identifier (`GEMINI_MODEL`).
    pub model: String,
    /// Prompt template location (`PROMPT_PATH`), relative to the app root.
    pub prompt_path: PathBuf,
    /// URL advertised in share payloads (`PAGE_URL`).
    pub page_url: String,
    /// Service port (`APP_PORT`).
    pub port: u16,
    /// Suppress GUI dialogs, print to the terminal instead
    /// (`NAMEGEN_HEADLESS`).
    #[serde(default)]
    pub headless: bool,
}

fn parse_bool_env(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            prompt_path: PathBuf::from(DEFAULT_PROMPT_PATH),
            page_url: DEFAULT_PAGE_URL.to_string(),
            port: DEFAULT_PORT,
            headless: false,
        }
    }
}

impl Config {
    /// Build a configuration from the process environment, falling back
    /// to defaults for everything except the credential.
    pub fn from_env() -> Self {
        let defaults = Config::default();
        Config {
            api_key: non_empty(std::env::var("GOOGLE_API_KEY").ok()),
            api_base: non_empty(std::env::var("GEMINI_API_BASE").ok())
                .unwrap_or(defaults.api_base),
            model: non_empty(std::env::var("GEMINI_MODEL").ok()).unwrap_or(defaults.model),
            prompt_path: non_empty(std::env::var("PROMPT_PATH").ok())
                .map(PathBuf::from)
                .unwrap_or(defaults.prompt_path),
            page_url: non_empty(std::env::var("PAGE_URL").ok()).unwrap_or(defaults.page_url),
            port: std::env::var("APP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            headless: std::env::var("NAMEGEN_HEADLESS")
                .map(|v| parse_bool_env(&v))
                .unwrap_or(false),
        }
    }

    /// Whether a provider credential is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
