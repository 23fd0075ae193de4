//! Command-line interface for noughts.

use clap::{Parser, Subcommand};

/// Noughts - two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the console or a terminal UI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Front-end to run (defaults to console)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front-ends
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play by typing 1-based "row col" pairs; q quits
    Console,

    /// Play in a full-screen terminal UI
    Tui {
        /// File receiving log output while the UI owns the terminal
        #[arg(long, default_value = "noughts_tui.log")]
        log_file: std::path::PathBuf,
    },
}
