//! Number Baseball - Unified CLI
//!
//! Line mode on stdin/stdout, or a full-screen terminal UI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use number_baseball::{Controller, Settings, line_mode};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?
        .with_seed(cli.seed)
        .with_log_filter(cli.log_filter.clone());
    if cli.no_reveal {
        settings = settings.with_allow_reveal(false);
    }

    let command = cli.command.unwrap_or(Command::Play);
    init_tracing(&settings, command)?;
    info!(?command, "Starting number baseball");

    let controller = Controller::from_settings(&settings);
    match command {
        Command::Play => run_line_mode(controller),
        Command::Tui => tui::run_tui(controller),
    }
}

/// Log file used by the TUI when none is configured.
const DEFAULT_TUI_LOG_FILE: &str = "number_baseball.log";

/// Where logs go for `command`; `None` means stderr.
///
/// The TUI owns the terminal, so it always logs to a file.
fn log_destination(settings: &Settings, command: Command) -> Option<PathBuf> {
    match (settings.log_file(), command) {
        (Some(path), _) => Some(path.clone()),
        (None, Command::Tui) => Some(PathBuf::from(DEFAULT_TUI_LOG_FILE)),
        (None, Command::Play) => None,
    }
}

/// Installs the global subscriber.
fn init_tracing(settings: &Settings, command: Command) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter()));

    match log_destination(settings, command) {
        Some(path) => {
            let log_file = std::fs::File::create(&path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(log_file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

/// Run the line-mode game on stdin/stdout.
#[instrument(skip(controller))]
fn run_line_mode<R: rand::Rng>(mut controller: Controller<R>) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    line_mode::run(&mut controller, stdin.lock(), stdout.lock())
        .context("Line mode I/O failed")
}
