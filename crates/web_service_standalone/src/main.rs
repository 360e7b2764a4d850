use clap::Parser;
use namegen_core::Config;

#[derive(Parser)]
#[command(name = "namegen-server")]
#[command(about = "Wu-Tang name generation service")]
#[command(version)]
struct Cli {
    /// Port to bind (overrides APP_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(port) = cli.port {
        config.port = port;
    }

    log::info!(
        "starting name service (model={}, prompt={})",
        config.model,
        config.prompt_path.display()
    );
    if !config.has_api_key() {
        // boot anyway; the handler reports the config error per request
        log::warn!("GOOGLE_API_KEY is not set; generation requests will fail");
    }

    if let Err(e) = web_service::server::run(config).await {
        log::error!("Failed to run web service: {e}");
        std::process::exit(1);
    }
}
