//! Named board positions.
//!
//! `(row, col)` pairs are what the engine operates on; `Position` is the
//! typed form used by keyboard input, line tables and the replay parser.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, SIZE};

/// A cell position on the board, in row-major order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Row 0, column 0.
    TopLeft,
    /// Row 0, column 1.
    TopCenter,
    /// Row 0, column 2.
    TopRight,
    /// Row 1, column 0.
    MiddleLeft,
    /// Row 1, column 1.
    Center,
    /// Row 1, column 2.
    MiddleRight,
    /// Row 2, column 0.
    BottomLeft,
    /// Row 2, column 1.
    BottomCenter,
    /// Row 2, column 2.
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.to_index() / SIZE
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.to_index() % SIZE
    }

    /// Creates position from `(row, col)`.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row >= SIZE || col >= SIZE {
            return None;
        }
        Self::from_index(row * SIZE + col)
    }

    /// Keypad number (1-9), counting left to right from the top row.
    pub fn keypad(self) -> u8 {
        // Index is at most 8.
        self.to_index() as u8 + 1
    }

    /// Creates position from a keypad number (1-9).
    pub fn from_keypad(key: u8) -> Option<Self> {
        match key {
            1..=9 => Self::from_index(usize::from(key - 1)),
            _ => None,
        }
    }

    /// Returns the neighbouring position one step away, if still on the board.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row().checked_add_signed(d_row)?;
        let col = self.col().checked_add_signed(d_col)?;
        Self::from_row_col(row, col)
    }

    /// Filters positions by board state - returns only empty squares.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.at(*pos).is_empty())
            .collect()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_row_col_round_trip() {
        for pos in Position::iter() {
            assert_eq!(Position::from_row_col(pos.row(), pos.col()), Some(pos));
        }
        assert_eq!(Position::from_row_col(3, 0), None);
        assert_eq!(Position::from_row_col(0, 3), None);
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::iter().enumerate() {
            assert_eq!(pos.to_index(), i);
            assert_eq!(Position::from_index(i), Some(pos));
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Position::MiddleRight.to_string(), "Middle-right");
    }

    #[test]
    fn test_keypad_mapping() {
        assert_eq!(Position::from_keypad(1), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad(5), Some(Position::Center));
        assert_eq!(Position::from_keypad(9), Some(Position::BottomRight));
        assert_eq!(Position::from_keypad(0), None);
        assert_eq!(Position::from_keypad(10), None);
        assert_eq!(Position::MiddleRight.keypad(), 6);
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Position::Center.offset(-1, 0), Some(Position::TopCenter));
        assert_eq!(Position::TopLeft.offset(-1, 0), None);
        assert_eq!(Position::TopLeft.offset(0, -1), None);
        assert_eq!(Position::BottomRight.offset(0, 1), None);
        assert_eq!(Position::MiddleLeft.offset(1, 1), Some(Position::BottomCenter));
    }
}
