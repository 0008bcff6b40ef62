//! press-me - a one-page terminal app
//!
//! Shows a button; pressing it (mouse click, Enter, or Space) reveals the
//! greeting heading. Quit with q, Esc, or Ctrl+C.

mod app;
mod config;
mod data;
mod frontend;
mod theme;
mod ui;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "press-me")]
#[command(about = "Terminal demo: a button that reveals a greeting", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.press-me)
    /// Can also be set via PRESS_ME_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a configuration file
    ValidateConfig {
        /// Config file to validate (default: the active config)
        #[arg(value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file
    // (use RUST_LOG to control the level, e.g. RUST_LOG=debug)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("press-me.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    if let Some(command) = cli.command {
        match command {
            Commands::ValidateConfig { config } => return validate_config(config),
        }
    }

    // Set custom data directory if specified
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("PRESS_ME_DIR", data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    }

    let config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load()?,
    };

    run_tui(config)
}

/// Validate a config file and report problems, exiting nonzero on errors
fn validate_config(path: Option<PathBuf>) -> Result<()> {
    let result = match path {
        Some(path) => {
            println!("Validating config file: {:?}", path);
            config::Config::load_from_path(&path)
        }
        None => {
            println!("Validating active config");
            config::Config::load()
        }
    };

    match result {
        Ok(config) => {
            let errors = config.validate();
            if errors.is_empty() {
                println!("✓ Config is valid");
            } else {
                for error in &errors {
                    eprintln!("✗ Error: {}", error);
                }
                eprintln!("\n✗ Found {} error(s)", errors.len());
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("✗ Failed to load config: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

/// Synchronous frame/event loop
fn run_tui(config: config::Config) -> Result<()> {
    use app::App;
    use frontend::TuiFrontend;

    let poll_timeout = Duration::from_millis(config.ui.poll_ms.max(1));
    let capture_mouse = config.ui.mouse_enabled;

    let mut frontend = TuiFrontend::new(poll_timeout, capture_mouse)?;
    let mut app = App::new(&config);

    tracing::info!("press-me started");

    while app.running {
        // Draw first so the click hit-test always has a layout to match
        if app.needs_render {
            frontend.render(&mut app)?;
            app.needs_render = false;
        }

        for event in frontend.poll_events()? {
            app.handle_event(&event);
        }
    }

    frontend.cleanup()?;
    tracing::info!("press-me exited");
    Ok(())
}
