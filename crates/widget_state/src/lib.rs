//! widget_state - View state machine for the generator widget
//!
//! Pure state transitions, no I/O. The widget binary feeds events in and
//! performs whatever side effect the outcome asks for.

pub mod machine;

// Re-export commonly used types
pub use machine::{EventOutcome, SubmitOutcome, ThemeMode, WidgetEvent, WidgetState};
