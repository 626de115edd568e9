//! Pure tic-tac-toe rules.
//!
//! Everything in this crate operates on [`Board`] values and never mutates
//! its inputs. The stateful session that owns a live game sits on top of
//! these functions in the `tictac` crate.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{apply_move, classify, Board, Outcome, Player};
//!
//! let board = Board::new();
//! let next = apply_move(&board, 1, 1, Player::X).unwrap();
//!
//! assert!(board.is_blank());
//! assert_eq!(classify(&next), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod lines;
mod outcome;
mod position;
mod types;

pub mod rules;

pub use action::{MoveError, apply_move};
pub use lines::{Line, LineKind, enumerate_lines};
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{classify, winning_line};
pub use types::{Board, BoardParseError, Cell, Player, SIZE};
