//! The eight lines that can win a game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{Board, Cell, Player, Position};

/// Which of the eight lines a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
    /// A row, by index.
    Row(usize),
    /// A column, by index.
    Column(usize),
}

/// Enumeration order: diagonals, then rows, then columns.
const LINES: [(LineKind, [Position; 3]); 8] = [
    (
        LineKind::MainDiagonal,
        [Position::TopLeft, Position::Center, Position::BottomRight],
    ),
    (
        LineKind::AntiDiagonal,
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ),
    (
        LineKind::Row(0),
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
    ),
    (
        LineKind::Row(1),
        [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    ),
    (
        LineKind::Row(2),
        [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    ),
    (
        LineKind::Column(0),
        [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    ),
    (
        LineKind::Column(1),
        [Position::TopCenter, Position::Center, Position::BottomCenter],
    ),
    (
        LineKind::Column(2),
        [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    ),
];

/// A snapshot of one line's cells, taken from a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Line {
    kind: LineKind,
    positions: [Position; 3],
    cells: [Cell; 3],
}

impl Line {
    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Positions covered, in order.
    pub fn positions(&self) -> &[Position; 3] {
        &self.positions
    }

    /// The player holding all three cells, if any.
    pub fn winner(&self) -> Option<Player> {
        let [a, b, c] = self.cells;
        a.player().filter(|_| a == b && b == c)
    }

    /// True if all three cells hold the same mark.
    pub fn is_winning(&self) -> bool {
        self.winner().is_some()
    }

    /// True if the line holds both an x and an o and can never be won.
    pub fn is_blocked(&self) -> bool {
        let has = |p: Player| self.cells.contains(&Cell::Marked(p));
        has(Player::X) && has(Player::O)
    }

    /// True if the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.positions.contains(&pos)
    }
}

/// Returns all eight lines of `board`.
///
/// Order is fixed: main diagonal, anti-diagonal, rows 0-2, columns 0-2.
/// Winner reporting depends on it when more than one line is complete.
#[instrument(skip(board))]
pub fn enumerate_lines(board: &Board) -> [Line; 8] {
    LINES.map(|(kind, positions)| Line {
        kind,
        positions,
        cells: positions.map(|pos| board.at(pos)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumeration_order() {
        let kinds: Vec<LineKind> = enumerate_lines(&Board::new())
            .iter()
            .map(Line::kind)
            .collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal,
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Column(2),
            ]
        );
    }

    #[test]
    fn test_every_line_is_straight() {
        for line in enumerate_lines(&Board::new()) {
            let [a, b, c] = *line.positions();
            match line.kind() {
                LineKind::Row(r) => assert!([a, b, c].iter().all(|p| p.row() == r)),
                LineKind::Column(col) => assert!([a, b, c].iter().all(|p| p.col() == col)),
                LineKind::MainDiagonal => assert!([a, b, c].iter().all(|p| p.row() == p.col())),
                LineKind::AntiDiagonal => {
                    assert!([a, b, c].iter().all(|p| p.row() + p.col() == 2))
                }
            }
        }
    }

    #[test]
    fn test_blocked_and_winning() {
        let board: Board = "xox/ooo/x..".parse().unwrap();
        let lines = enumerate_lines(&board);
        let row0 = lines[2];
        let row1 = lines[3];
        let row2 = lines[4];
        assert!(row0.is_blocked());
        assert!(!row0.is_winning());
        assert_eq!(row1.winner(), Some(Player::O));
        assert!(!row2.is_blocked());
        assert!(!row2.is_winning());
    }

    #[test]
    fn test_empty_line_neither_blocked_nor_winning() {
        let line = enumerate_lines(&Board::new())[0];
        assert!(!line.is_blocked());
        assert_eq!(line.winner(), None);
    }
}
