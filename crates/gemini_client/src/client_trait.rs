use async_trait::async_trait;

use crate::error::Result;

/// The single provider operation the service depends on.
///
/// The concrete [`crate::GeminiClient`] performs network I/O; tests
/// substitute an in-process fake.
#[async_trait]
pub trait GeminiClientTrait: Send + Sync {
    /// Run one single-shot text generation for `prompt` and return the
    /// raw generated text (untrimmed).
    async fn generate(&self, prompt: &str) -> Result<String>;
}
