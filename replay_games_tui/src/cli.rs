//! Command-line interface for the TUI.

use clap::Parser;
use std::path::PathBuf;

/// Replay tic-tac-toe - play, browse the move list, jump back in time.
#[derive(Parser, Debug)]
#[command(name = "replay_games_tui")]
#[command(about = "Tic-tac-toe with full move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Start with the move list in descending order.
    #[arg(long)]
    pub descending: bool,

    /// Append tracing output to this file (the terminal is taken over by
    /// the UI, so logging is off without it).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
