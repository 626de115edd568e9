//! Draw detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, enumerate_lines};

/// True when every line holds both marks, so nobody can win any more.
///
/// An empty line blocks nothing, which keeps the empty board undecided.
#[instrument(skip(board))]
pub fn all_lines_blocked(board: &Board) -> bool {
    enumerate_lines(board).iter().all(|line| line.is_blocked())
}
