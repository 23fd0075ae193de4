//! Noughts - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{ConsoleController, ConsoleError, GameEngine, Session};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let Cli { log_level, command } = Cli::parse();

    match command.unwrap_or(Command::Console) {
        Command::Console => run_console(&log_level),
        Command::Tui { log_file } => run_tui(&log_level, &log_file),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Run the console game on stdin/stdout
fn run_console(log_level: &str) -> Result<()> {
    // Logs go to stderr so stdout carries only the game transcript
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting console game");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut engine = GameEngine::new();
    let mut console = ConsoleController::new(stdin.lock(), stdout.lock());

    match console.play_game(&mut engine) {
        Ok(Session::Finished(outcome)) => {
            info!(%outcome, "Game finished");
            Ok(())
        }
        Ok(Session::Quit) => {
            info!("Game quit");
            Ok(())
        }
        Err(ConsoleError::InputExhausted) => {
            bail!("input ended before the game finished (type q to quit)")
        }
        Err(err) => Err(err).context("console game failed"),
    }
}

/// Run the terminal UI, logging to a file
#[instrument(skip(log_level))]
fn run_tui(log_level: &str, log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(log_level))
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .init();

    noughts::run_tui()
}
