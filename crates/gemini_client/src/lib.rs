//! gemini_client - Google Gemini `generateContent` client
//!
//! One single-shot text-generation call per request, authenticated with a
//! `key` query parameter. The service talks to this crate exclusively
//! through [`GeminiClientTrait`] so tests can substitute a fake provider.

pub mod client;
pub mod client_trait;
pub mod error;
pub mod protocol;

pub use client::GeminiClient;
pub use client_trait::GeminiClientTrait;
pub use error::GeminiError;
