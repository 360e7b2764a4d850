//! The generator widget: view state plus the side effects around it.

use namegen_core::ShareMessage;
use widget_state::{EventOutcome, SubmitOutcome, ThemeMode, WidgetEvent, WidgetState};

use crate::api::ApiClient;
use crate::share::{self, ShareError, ShareGateway, SharePlatform};

/// A stateful, single-instance, interactive view.
///
/// Exactly one request is awaited per submit action; overlapping
/// submissions are not prevented, and the sequence-number guard in
/// `widget_state` decides which response lands.
pub struct GeneratorWidget {
    state: WidgetState,
    api: ApiClient,
    gateway: Box<dyn ShareGateway>,
    page_url: String,
}

impl GeneratorWidget {
    pub fn new(api: ApiClient, gateway: Box<dyn ShareGateway>, page_url: impl Into<String>) -> Self {
        Self {
            state: WidgetState::new(),
            api,
            gateway,
            page_url: page_url.into(),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Phase two of initialization: the environment theme is resolved
    /// and the view may render.
    pub fn mount(&mut self, theme: ThemeMode) {
        self.state.handle_event(WidgetEvent::Mounted { theme });
    }

    pub fn input_changed(&mut self, value: &str) {
        self.state.handle_event(WidgetEvent::InputChanged {
            value: value.to_string(),
        });
    }

    pub fn toggle_theme(&mut self) {
        self.state.handle_event(WidgetEvent::ThemeToggled);
    }

    /// Submit the current input. An empty input sets the error text and
    /// issues no request; otherwise one request is sent and awaited.
    pub async fn submit(&mut self) {
        let EventOutcome::DispatchRequest { seq, name } =
            self.state.handle_event(WidgetEvent::SubmitRequested)
        else {
            return;
        };

        let outcome = match self.api.generate(&name).await {
            Ok(generated_name) => SubmitOutcome::Success { generated_name },
            Err(e) => {
                log::error!("generation request failed: {e}");
                SubmitOutcome::Failure
            }
        };
        self.state
            .handle_event(WidgetEvent::ResponseArrived { seq, outcome });
    }

    /// Run one share action. Before a name exists this is a no-op apart
    /// from a blocking alert.
    pub fn share(&self, platform: SharePlatform) -> Result<(), ShareError> {
        if !self.state.can_share() {
            self.gateway
                .alert("Nothing to share", "Please generate a Wu-Tang name first!");
            return Ok(());
        }

        let message = ShareMessage::new(&self.state.generated_name, &self.page_url);
        share::share(platform, &message, self.gateway.as_ref())
    }
}
