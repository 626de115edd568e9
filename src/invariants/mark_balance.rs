//! Mark balance: x moves first, so x never trails and never leads by two.

use tictac_engine::Player;

use super::Invariant;
use crate::GameState;

/// Invariant: the x count minus the o count is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "x has played as many marks as o, or one more"
    }
}
