//! Win detection logic for tic-tac-toe.

use tracing::instrument;

use crate::{Board, Line, Player, enumerate_lines};

/// Returns the first complete line, in enumeration order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<Line> {
    enumerate_lines(board)
        .into_iter()
        .find(|line| line.is_winning())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).and_then(|line| line.winner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LineKind, Position};

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "xxx/.o./o..".parse().unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
        assert_eq!(winning_line(&board).map(|l| l.kind()), Some(LineKind::Row(0)));
    }

    #[test]
    fn test_winner_diagonal() {
        let board: Board = "o.x/.ox/..o".parse().unwrap();
        let line = winning_line(&board).unwrap();
        assert_eq!(line.kind(), LineKind::MainDiagonal);
        assert!(line.contains(Position::Center));
        assert_eq!(check_winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_column() {
        let board: Board = "xo./xo./.o.".parse().unwrap();
        assert_eq!(winning_line(&board).map(|l| l.kind()), Some(LineKind::Column(1)));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "xx./.../...".parse().unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
