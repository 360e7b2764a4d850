//! Widget states - the view state owned by the generator widget.

use serde::{Deserialize, Serialize};

/// The two fixed visual modes. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// The widget's ephemeral view state. Lifetime = one widget instance.
///
/// Invariants maintained by the transitions:
/// - `is_loading` and `result_visible` are never both true while a
///   request is in flight
/// - `error_text` is cleared on every input change
/// - nothing renders before `mounted` is set
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WidgetState {
    pub input_name: String,
    pub generated_name: String,
    pub result_visible: bool,
    pub is_loading: bool,
    pub error_text: String,
    pub theme: ThemeMode,
    pub mounted: bool,
    /// Sequence number of the most recent submission. Responses tagged
    /// with an older sequence are stale and must be dropped.
    pub latest_seq: u64,
}

impl WidgetState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The render gate: nothing is drawn until the theme is resolved.
    pub fn renders(&self) -> bool {
        self.mounted
    }

    /// Share actions only mean something once a name exists.
    pub fn can_share(&self) -> bool {
        !self.generated_name.is_empty()
    }

    pub fn has_error(&self) -> bool {
        !self.error_text.is_empty()
    }

    /// Get a human-readable description of the current state.
    pub fn description(&self) -> &str {
        if !self.mounted {
            "Initializing"
        } else if self.is_loading {
            "Generating..."
        } else if self.has_error() {
            "Failed"
        } else if self.result_visible {
            "Name ready"
        } else {
            "Ready for input"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_unmounted_dark() {
        let state = WidgetState::new();
        assert!(!state.renders());
        assert_eq!(state.theme, ThemeMode::Dark);
        assert!(!state.can_share());
        assert_eq!(state.description(), "Initializing");
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Dark.toggled().toggled(), ThemeMode::Dark);
    }
}
