//! Widget events - everything that can change the view state.

use serde::{Deserialize, Serialize};

use super::states::ThemeMode;

/// How a dispatched request ended.
///
/// The widget never surfaces the service's specific error message; any
/// failure renders the one generic retry prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitOutcome {
    Success { generated_name: String },
    Failure,
}

/// Defines the events that drive the widget's state transitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetEvent {
    /// The environment theme has been resolved; the view may render.
    Mounted { theme: ThemeMode },

    /// The user edited the name input.
    InputChanged { value: String },

    /// The user asked for a name to be generated.
    SubmitRequested,

    /// A dispatched request completed. `seq` identifies which request.
    ResponseArrived { seq: u64, outcome: SubmitOutcome },

    /// The user flipped the visual mode.
    ThemeToggled,
}
