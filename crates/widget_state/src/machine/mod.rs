//! State machine module
//!
//! Contains the view-state record and its event-driven transitions.

mod events;
mod states;
mod transitions;

pub use events::{SubmitOutcome, WidgetEvent};
pub use states::{ThemeMode, WidgetState};
pub use transitions::EventOutcome;
