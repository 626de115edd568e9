//! Two-player tic-tac-toe in the terminal.
//!
//! # Architecture
//!
//! - **Engine** (`tictac_engine`): pure board rules, re-exported here
//! - **Controller**: the live session (board, turn, outcome)
//! - **TUI**: ratatui view driving the controller
//! - **Replay**: headless move-list runner
//!
//! # Example
//!
//! ```
//! use tictac::{Controller, Outcome, Player};
//!
//! let mut game = Controller::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.select_move(row, col).unwrap();
//! }
//! assert_eq!(game.outcome(), Outcome::Won(Player::X));
//! assert_eq!(game.message().as_deref(), Some("x wins!"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod controller;
mod logging;
mod replay;
mod settings;
mod tui;

pub mod invariants;

// Crate-level exports - Engine
pub use tictac_engine::{
    Board, Cell, Line, LineKind, MoveError, Outcome, Player, Position, apply_move, classify,
    enumerate_lines, winning_line,
};

// Crate-level exports - Session
pub use controller::{Controller, GameState, InvalidGameState};

// Crate-level exports - CLI and configuration
pub use cli::{Cli, Command};
pub use logging::{init_file_logging, init_stderr_logging};
pub use settings::{ConfigError, DEFAULT_SETTINGS_FILE, Settings};

// Crate-level exports - Replay
pub use replay::{MoveParseError, RejectedMove, ReplayReport, parse_move, replay};

// Crate-level exports - Terminal UI
pub use tui::{Action, App, board_layout, cell_at, draw, key_action, mouse_action, run_tui};
