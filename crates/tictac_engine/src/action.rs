//! Applying a move to a board.

use tracing::{instrument, trace};

use crate::{Board, Cell, Player};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MoveError {
    /// Row or column is outside the 3x3 board.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Returns a copy of `board` with `player`'s mark at `(row, col)`.
///
/// The input board is left untouched. Fails if the cell is off the board
/// or already marked.
#[instrument(skip(board), fields(%player))]
pub fn apply_move(
    board: &Board,
    row: usize,
    col: usize,
    player: Player,
) -> Result<Board, MoveError> {
    match board.get(row, col) {
        None => Err(MoveError::OutOfBounds { row, col }),
        Some(Cell::Marked(_)) => Err(MoveError::CellOccupied { row, col }),
        Some(Cell::Empty) => {
            let mut next = *board;
            next.set(row, col, Cell::Marked(player));
            trace!("Mark placed");
            Ok(next)
        }
    }
}
