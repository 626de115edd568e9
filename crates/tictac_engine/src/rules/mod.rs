//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board. Rules are kept apart from board
//! storage so the controller can compose them into a single transition.

pub mod draw;
pub mod win;

pub use draw::all_lines_blocked;
pub use win::{check_winner, winning_line};

use tracing::{debug, instrument};

use crate::{Board, Outcome};

/// Classifies a board as won, drawn or still in progress.
///
/// The first winning line in [`enumerate_lines`](crate::enumerate_lines)
/// order decides the winner.
/// With no winner, the board is drawn once every line is blocked, which
/// can happen before the board is full.
#[instrument(skip(board))]
pub fn classify(board: &Board) -> Outcome {
    let outcome = if let Some(winner) = check_winner(board) {
        Outcome::Won(winner)
    } else if all_lines_blocked(board) {
        Outcome::Drawn
    } else {
        Outcome::InProgress
    };

    debug!(?outcome, "Board classified");
    outcome
}
