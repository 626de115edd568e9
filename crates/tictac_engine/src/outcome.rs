//! Derived classification of a board.

use serde::{Deserialize, Serialize};

use crate::Player;

/// Result of classifying a board.
///
/// Never stored independently of a board; recompute with
/// [`classify`](crate::classify) whenever the board changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Moves remain and a win is still possible.
    #[default]
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// No line can be won any more.
    Drawn,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(player),
            Outcome::InProgress | Outcome::Drawn => None,
        }
    }

    /// True for `Won` and `Drawn`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Message shown once the game is over.
    pub fn message(self) -> Option<String> {
        match self {
            Outcome::InProgress => None,
            Outcome::Won(player) => Some(format!("{player} wins!")),
            Outcome::Drawn => Some("Cat's game!".to_string()),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => f.write_str(&message),
            None => f.write_str("In progress"),
        }
    }
}
