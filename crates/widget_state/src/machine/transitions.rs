//! State transitions - event-driven changes to the widget view state.

use super::events::{SubmitOutcome, WidgetEvent};
use super::states::WidgetState;

/// Shown when the user submits an empty name.
pub const EMPTY_INPUT_ERROR: &str = "Please enter your name";

/// Shown for every failed request, regardless of the service's reason.
pub const GENERIC_FAILURE_ERROR: &str = "Failed to generate name. Please try again.";

/// What the caller must do after an event has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Issue one generation request for `name`, and report its completion
    /// with `ResponseArrived { seq, .. }`.
    DispatchRequest { seq: u64, name: String },
    /// The state changed; nothing to dispatch.
    None,
}

impl WidgetState {
    /// Apply an event and report the required side effect.
    ///
    /// Submissions are not de-duplicated: each `SubmitRequested` with a
    /// non-empty name allocates a fresh sequence number, and overlapping
    /// requests resolve by sequence, not by arrival order. A response
    /// carrying anything other than the latest sequence is dropped.
    pub fn handle_event(&mut self, event: WidgetEvent) -> EventOutcome {
        match event {
            WidgetEvent::Mounted { theme } => {
                self.theme = theme;
                self.mounted = true;
                EventOutcome::None
            }

            WidgetEvent::InputChanged { value } => {
                self.input_name = value;
                self.error_text.clear();
                EventOutcome::None
            }

            WidgetEvent::SubmitRequested => {
                let name = self.input_name.trim().to_string();
                if name.is_empty() {
                    self.error_text = EMPTY_INPUT_ERROR.to_string();
                    return EventOutcome::None;
                }

                self.latest_seq += 1;
                self.is_loading = true;
                self.result_visible = false;
                self.error_text.clear();
                EventOutcome::DispatchRequest {
                    seq: self.latest_seq,
                    name,
                }
            }

            WidgetEvent::ResponseArrived { seq, outcome } => {
                if seq != self.latest_seq {
                    log::debug!(
                        "dropping stale response seq={} (latest={})",
                        seq,
                        self.latest_seq
                    );
                    return EventOutcome::None;
                }

                match outcome {
                    SubmitOutcome::Success { generated_name } => {
                        self.generated_name = generated_name;
                        self.result_visible = true;
                    }
                    SubmitOutcome::Failure => {
                        self.error_text = GENERIC_FAILURE_ERROR.to_string();
                    }
                }
                self.is_loading = false;
                EventOutcome::None
            }

            WidgetEvent::ThemeToggled => {
                self.theme = self.theme.toggled();
                EventOutcome::None
            }
        }
    }
}
