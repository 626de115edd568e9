//! Outcome currency: the stored outcome is never behind the board.

use tictac_engine::classify;

use super::Invariant;
use crate::GameState;

/// Invariant: the stored outcome equals a fresh classification of the board.
pub struct OutcomeCurrentInvariant;

impl Invariant<GameState> for OutcomeCurrentInvariant {
    fn holds(state: &GameState) -> bool {
        state.outcome() == classify(state.board())
    }

    fn description() -> &'static str {
        "Outcome reflects the most recent move"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_holds_on_winning_move() {
        let mut state = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            state = state.select(row, col).unwrap();
            assert!(OutcomeCurrentInvariant::holds(&state));
        }
        assert!(state.outcome().is_terminal());
    }
}
