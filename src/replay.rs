//! Headless replay of a move list.

use tictac_engine::{MoveError, Position};
use tracing::{instrument, warn};

use crate::{Controller, GameState};

/// Error parsing a move argument.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveParseError {
    /// Not `ROW,COL` and not a number.
    #[display("Cannot parse move '{_0}': expected ROW,COL or a keypad number 1-9")]
    Malformed(String),
    /// A single number outside 1-9.
    #[display("Keypad number {_0} is not between 1 and 9")]
    KeypadOutOfRange(usize),
}

impl std::error::Error for MoveParseError {}

/// Parses `"row,col"` or a keypad number `"1"`-`"9"` into `(row, col)`.
///
/// Row and column are not range-checked here; the controller rejects
/// cells off the board.
pub fn parse_move(s: &str) -> Result<(usize, usize), MoveParseError> {
    let s = s.trim();
    let malformed = || MoveParseError::Malformed(s.to_string());

    if let Some((row, col)) = s.split_once(',') {
        let row = row.trim().parse().map_err(|_| malformed())?;
        let col = col.trim().parse().map_err(|_| malformed())?;
        return Ok((row, col));
    }

    let key: usize = s.parse().map_err(|_| malformed())?;
    u8::try_from(key)
        .ok()
        .and_then(Position::from_keypad)
        .map(|pos| (pos.row(), pos.col()))
        .ok_or(MoveParseError::KeypadOutOfRange(key))
}

/// A move that was skipped during replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RejectedMove {
    /// Zero-based index in the input list.
    pub index: usize,
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Why it was skipped.
    pub error: MoveError,
}

/// Result of replaying a move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Final state.
    pub state: GameState,
    /// Moves that had no effect.
    pub rejected: Vec<RejectedMove>,
}

impl ReplayReport {
    /// Final board followed by the outcome message, or whose turn it is.
    pub fn summary(&self) -> String {
        let status = self
            .state
            .outcome()
            .message()
            .unwrap_or_else(|| format!("{} to move", self.state.current_player()));
        format!("{}\n\n{}", self.state.board(), status)
    }
}

/// Plays `moves` in order through a fresh controller.
///
/// Rejected moves are logged and skipped, exactly as a click on an
/// occupied cell would be.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(moves: &[(usize, usize)]) -> ReplayReport {
    let mut controller = Controller::new();
    let mut rejected = Vec::new();

    for (index, &(row, col)) in moves.iter().enumerate() {
        if let Err(error) = controller.select_move(row, col) {
            warn!(index, row, col, %error, "Move skipped");
            rejected.push(RejectedMove {
                index,
                row,
                col,
                error,
            });
        }
    }

    ReplayReport {
        state: *controller.state(),
        rejected,
    }
}
