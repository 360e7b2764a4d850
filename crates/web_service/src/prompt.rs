//! Prompt template loading and composition.
//!
//! The template is read fresh on every request so edits take effect
//! without a restart. No caching.

use std::path::Path;

use crate::error::{AppError, Result};

/// Read the static prompt template from disk.
pub fn read_template(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        log::error!("failed to read prompt template {}: {e}", path.display());
        AppError::PromptTemplate(e)
    })
}

/// Compose the full prompt: template, a labeled user-input section, and
/// the output marker the model completes from.
pub fn compose(template: &str, name: &str) -> String {
    format!("{template}\n\nUser Input:\n{name}\n\nLLM Output:")
}
