//! Notes TUI Entry Point
//!
//! Launches the terminal form for submitting notes to the analysis service.
//!
//! Usage:
//!   notes-tui [OPTIONS]
//!
//! Options:
//!   -a, --api-base <URL>    Analysis service base URL (overrides config/env)
//!   -c, --config <FILE>     Config file (default: ~/.config/notes/client.toml)
//!       --log-file <PATH>   Write logs to a file instead of stderr
//!       --no-health         Skip the startup health probe
//!
//! Verbosity follows `RUST_LOG`, e.g. `RUST_LOG=notes_core=debug`.

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use notes_core::{
    load_config, load_config_from_path, ClientConfig, ConfigOverrides, HttpAnalysisClient,
};
use notes_tui::App;

/// Notes TUI - submit a short note for analysis
#[derive(Parser, Debug)]
#[command(name = "notes-tui")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Analysis service base URL
    #[arg(short = 'a', long, value_name = "URL")]
    api_base: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, env = "NOTES_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, env = "NOTES_LOG_FILE", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Skip the startup health probe
    #[arg(long)]
    no_health: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_logging(args.log_file.as_deref())?;

    let config = resolve_config(&args)?;
    tracing::info!(
        base_url = %config.base_url,
        source = %config.source(),
        "Using analysis service"
    );

    // Check if we have a TTY before attempting initialization
    use std::io::IsTerminal;

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        eprintln!("Error: notes-tui requires a terminal (TTY)");
        eprintln!();
        eprintln!("This usually means stdin/stdout are piped or the session is non-interactive.");
        std::process::exit(1);
    }

    // Set up panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Restore terminal before printing panic
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal, &config, !args.no_health).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Propagate any errors
    result
}

/// Install the tracing subscriber
///
/// Logs go to `log_file` when given, otherwise to stderr.
fn init_logging(log_file: Option<&Path>) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {path:?}"))?;
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            registry
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(false)
                        .with_writer(io::stderr),
                )
                .init();
        }
    }
    Ok(())
}

/// Load configuration and apply CLI overrides
fn resolve_config(args: &Args) -> anyhow::Result<ClientConfig> {
    let mut config = match args.config {
        Some(ref path) => load_config_from_path(Some(path.clone())),
        None => load_config(),
    }
    .context("Failed to load configuration")?;
    config
        .apply_overrides(&ConfigOverrides {
            base_url: args.api_base.clone(),
        })
        .context("Invalid --api-base")?;
    Ok(config)
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &ClientConfig,
    probe_health: bool,
) -> anyhow::Result<()> {
    let client = HttpAnalysisClient::new(&config.base_url)
        .context("Failed to create HTTP client")?;
    let mut app = App::new(client, &config.base_url);
    if probe_health {
        app.probe_health();
    }
    app.run(terminal).await
}
