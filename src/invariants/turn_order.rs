//! Turn order: the player to move follows from the marks on the board.

use tictac_engine::Player;

use super::Invariant;
use crate::GameState;

/// Invariant: x is to move exactly when both players have the same count.
///
/// Holds on terminal states too, since the turn flips on every accepted
/// move including the last one.
pub struct TurnOrderInvariant;

impl Invariant<GameState> for TurnOrderInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        let even = board.count(Player::X) == board.count(Player::O);
        (state.current_player() == Player::X) == even
    }

    fn description() -> &'static str {
        "Players alternate turns (x, o, x, o, ...)"
    }
}
