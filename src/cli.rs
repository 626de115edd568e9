//! Command-line interface for tictac.

use clap::{Parser, Subcommand};

/// Two-player tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./tictac.toml when present.
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq, Default)]
pub enum Command {
    /// Play in the terminal UI
    #[default]
    Play,

    /// Apply a list of moves and print the resulting board
    Replay {
        /// Moves as ROW,COL (zero-based) or keypad numbers 1-9, x first
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
