use std::io::{self, Write};

use clap::Parser;
use colored::Colorize;
use name_widget::{ApiClient, GeneratorWidget, SharePlatform, SystemShare};
use widget_state::{ThemeMode, WidgetState};

#[derive(Parser)]
#[command(name = "name-widget")]
#[command(about = "Interactive Wu-Tang name generator")]
#[command(version)]
struct Cli {
    /// Name service to talk to
    #[arg(long, default_value = "http://localhost:8080")]
    server_url: String,

    /// URL advertised in share payloads (defaults to the server URL)
    #[arg(long)]
    page_url: Option<String>,

    /// Print alerts to the terminal instead of showing dialogs
    #[arg(long, default_value = "false")]
    headless: bool,
}

/// Phase two of startup: resolve the environment's theme preference.
fn resolve_theme() -> ThemeMode {
    match std::env::var("NAMEGEN_THEME").as_deref() {
        Ok("light") => ThemeMode::Light,
        _ => ThemeMode::Dark,
    }
}

fn accent(state: &WidgetState, text: &str) -> colored::ColoredString {
    match state.theme {
        ThemeMode::Dark => text.bright_yellow().bold(),
        ThemeMode::Light => text.yellow().bold(),
    }
}

fn render(state: &WidgetState) {
    // nothing renders before the theme is resolved
    if !state.renders() {
        return;
    }

    if state.is_loading {
        println!("{}", "Generating...".dimmed());
        return;
    }
    if state.has_error() {
        println!("{}", state.error_text.red());
        return;
    }
    if state.result_visible {
        println!();
        println!("  {}", accent(state, &state.generated_name));
        println!();
        println!(
            "{}",
            "Share it: /share whatsapp | facebook | email | instagram | x".dimmed()
        );
    } else {
        println!("{}", "Your Wu-Tang name will appear here".dimmed());
    }
}

fn print_banner(state: &WidgetState) {
    println!("{}", accent(state, "Wu-Tang Name Generator"));
    println!(
        "{}",
        "Type your real name to generate. Commands: /share <platform>, /theme, /quit".dimmed()
    );
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let page_url = cli.page_url.clone().unwrap_or_else(|| cli.server_url.clone());
    let mut widget = GeneratorWidget::new(
        ApiClient::new(cli.server_url),
        Box::new(SystemShare::new(cli.headless)),
        page_url,
    );

    widget.mount(resolve_theme());
    print_banner(widget.state());

    loop {
        print!("{} ", "You:".cyan().bold());
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "/quit" | "/exit" => {
                println!("{}", "Peace!".cyan());
                break;
            }
            "/theme" => {
                widget.toggle_theme();
                let mode = match widget.state().theme {
                    ThemeMode::Dark => "dark",
                    ThemeMode::Light => "light",
                };
                println!("{}", format!("Theme: {mode}").dimmed());
            }
            _ if input.starts_with("/share") => {
                let target = input.trim_start_matches("/share").trim();
                match target.parse::<SharePlatform>() {
                    Ok(platform) => {
                        if let Err(e) = widget.share(platform) {
                            println!("{}", format!("Share failed: {e}").red());
                        } else if widget.state().can_share() {
                            println!(
                                "{}",
                                format!("Shared via {}", platform.label()).green()
                            );
                        }
                    }
                    Err(e) => println!("{}", e.red()),
                }
            }
            _ => {
                widget.input_changed(input);
                widget.submit().await;
                render(widget.state());
            }
        }
    }

    Ok(())
}
