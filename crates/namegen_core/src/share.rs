use serde::{Deserialize, Serialize};

/// The message attached to every share action: the generated name plus
/// the page URL where a reader can generate their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShareMessage {
    pub text: String,
    pub url: String,
}

impl ShareMessage {
    pub fn new(generated_name: &str, page_url: &str) -> Self {
        Self {
            text: format!(
                "Check out my Wu-Tang Clan name: {generated_name} \u{1f3b5} Generate yours at"
            ),
            url: page_url.to_string(),
        }
    }

    /// Text and URL on one line, for messaging and post intents.
    pub fn inline(&self) -> String {
        format!("{} {}", self.text, self.url)
    }

    /// Text and URL separated by a blank line, for mail bodies and the
    /// clipboard.
    pub fn paragraph(&self) -> String {
        format!("{}\n\n{}", self.text, self.url)
    }
}
