//! tictac - two-player tic-tac-toe in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{Cli, Command, Settings};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("Failed to load settings")?;

    match cli.command.unwrap_or_default() {
        Command::Play => {
            tictac::init_file_logging(&settings)?;
            tictac::run_tui(&settings)
        }
        Command::Replay { moves } => {
            tictac::init_stderr_logging(&settings);
            run_replay(&moves)
        }
    }
}

/// Parse, replay and print.
fn run_replay(moves: &[String]) -> Result<()> {
    let parsed = moves
        .iter()
        .map(|m| tictac::parse_move(m))
        .collect::<Result<Vec<_>, _>>()?;

    info!(count = parsed.len(), "Replaying moves");
    let report = tictac::replay(&parsed);
    if !report.rejected.is_empty() {
        info!(skipped = report.rejected.len(), "Some moves had no effect");
    }

    println!("{}", report.summary());
    Ok(())
}
