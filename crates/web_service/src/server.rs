use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use gemini_client::{GeminiClient, GeminiClientTrait};
use log::info;
use namegen_core::Config;

use crate::controllers::{name_controller, system_controller};

/// Shared per-request state: the injected provider client and the loaded
/// configuration. The client is constructed once at startup and passed in
/// explicitly; there is no module-level provider handle.
pub struct AppState {
    pub client: Arc<dyn GeminiClientTrait>,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config, client: Arc<dyn GeminiClientTrait>) -> Self {
        Self { client, config }
    }
}

const DEFAULT_WORKER_COUNT: usize = 4;

pub fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.configure(name_controller::config)
        .configure(system_controller::config);
}

pub async fn run(config: Config) -> Result<(), String> {
    let port = config.port;
    let client: Arc<dyn GeminiClientTrait> = Arc::new(GeminiClient::new(&config));
    let app_state = web::Data::new(AppState::new(config, client));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .configure(app_config)
    })
    .workers(DEFAULT_WORKER_COUNT)
    .bind(format!("127.0.0.1:{port}"))
    .map_err(|e| format!("Failed to bind server: {e}"))?
    .run();

    info!("name service listening on http://127.0.0.1:{port}");

    server
        .await
        .map_err(|e| format!("Web server error: {e}"))
}
