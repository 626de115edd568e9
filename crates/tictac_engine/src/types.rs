//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

use crate::Position;

/// Width and height of the board.
pub const SIZE: usize = 3;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player X (goes first).
    #[display("x")]
    X,
    /// Player O (goes second).
    #[display("o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Raw symbol used when rendering the player's mark.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'x',
            Player::O => 'o',
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell holds the given player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// True if no mark has been placed.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; SIZE]; SIZE],
        }
    }

    /// Gets the cell at `(row, col)`, or `None` when off the board.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Gets the cell at a named position.
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// Places a cell value. Callers validate bounds and occupancy first.
    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row][col] = cell;
    }

    /// Iterates over every cell in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        Position::ALL.iter().map(|&pos| (pos, self.at(pos)))
    }

    /// Number of cells marked by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|c| **c == Cell::Marked(player))
            .count()
    }

    /// True if every cell is empty.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().flatten().all(|c| c.is_empty())
    }

    /// True if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|c| !c.is_empty())
    }

    /// Formats the board as a plain-text grid.
    ///
    /// Empty cells show their keypad number (1-9) so the output doubles
    /// as a move reference.
    #[instrument(skip(self))]
    pub fn render(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => result.push_str(&(row * SIZE + col + 1).to_string()),
                    Cell::Marked(player) => result.push(player.symbol()),
                }
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Wrong number of `/`-separated rows.
    #[display("expected 3 rows separated by '/', found {_0}")]
    RowCount(usize),
    /// A row did not contain exactly three cells.
    #[display("row {row} has {len} cells, expected 3")]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
    /// A character other than `x`, `o`, `.` or `-`.
    #[display("unexpected cell character '{_0}'")]
    BadCell(char),
}

impl std::error::Error for BoardParseError {}

/// Parses rows such as `"xo./.x./..o"`; `.` or `-` mark an empty cell.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.trim().chars().collect();
            if chars.len() != SIZE {
                return Err(BoardParseError::RowLength {
                    row,
                    len: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch.to_ascii_lowercase() {
                    'x' => Cell::Marked(Player::X),
                    'o' => Cell::Marked(Player::O),
                    '.' | '-' => Cell::Empty,
                    other => return Err(BoardParseError::BadCell(other)),
                };
                board.set(row, col, cell);
            }
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_blank() {
        let board = Board::new();
        assert!(board.is_blank());
        assert!(!board.is_full());
        assert_eq!(board.count(Player::X), 0);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.get(0, 3), None);
        assert_eq!(board.get(3, 0), None);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "xo./.x./..o".parse().unwrap();
        assert_eq!(board.get(0, 0), Some(Cell::Marked(Player::X)));
        assert_eq!(board.get(0, 1), Some(Cell::Marked(Player::O)));
        assert_eq!(board.get(1, 1), Some(Cell::Marked(Player::X)));
        assert_eq!(board.get(2, 2), Some(Cell::Marked(Player::O)));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "xox/ooo".parse::<Board>(),
            Err(BoardParseError::RowCount(2))
        );
        assert_eq!(
            "xox/oo/xxx".parse::<Board>(),
            Err(BoardParseError::RowLength { row: 1, len: 2 })
        );
        assert_eq!(
            "xox/oqo/xxx".parse::<Board>(),
            Err(BoardParseError::BadCell('q'))
        );
    }

    #[test]
    fn test_render_shows_marks_and_keypad() {
        let board: Board = "x../.o./...".parse().unwrap();
        assert_eq!(board.render(), "x|2|3\n-+-+-\n4|o|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_display_is_raw_symbol() {
        assert_eq!(Player::X.to_string(), "x");
        assert_eq!(Player::O.to_string(), "o");
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_player_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Player::O).unwrap(), "\"o\"");
    }
}
