//! name_widget - the interactive generator widget
//!
//! Owns the view state (via `widget_state`), talks to the name service
//! over HTTP, and performs the platform share actions. All share side
//! effects go through [`share::ShareGateway`] so they can be tested
//! without touching the system browser or clipboard.

pub mod api;
pub mod share;
pub mod widget;

pub use api::{ApiClient, ApiError};
pub use share::{ShareGateway, SharePlatform, SystemShare};
pub use widget::GeneratorWidget;
