//! Monotonic board: marks are only ever added, one per move.

use tictac_engine::Cell;

use super::{Invariant, Transition};

/// Invariant: a move marks exactly one empty cell and changes nothing else.
pub struct MonotonicBoardInvariant;

impl<'a> Invariant<Transition<'a>> for MonotonicBoardInvariant {
    fn holds(transition: &Transition<'a>) -> bool {
        let before = transition.before.board();
        let after = transition.after.board();

        let mut added = 0;
        for ((_, old), (_, new)) in before.iter().zip(after.iter()) {
            match (old, new) {
                (Cell::Empty, Cell::Marked(_)) => added += 1,
                (old, new) if old == new => {}
                _ => return false,
            }
        }
        added == 1
    }

    fn description() -> &'static str {
        "Each move marks exactly one empty cell and clears none"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Controller, GameState};

    #[test]
    fn test_legal_move_holds() {
        let before = GameState::new();
        let after = before.select(2, 1).unwrap();
        assert!(MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: &after,
        }));
    }

    #[test]
    fn test_reset_is_not_a_move() {
        let mut controller = Controller::new();
        controller.select_move(0, 0).unwrap();
        let before = *controller.state();
        controller.reset();
        assert!(!MonotonicBoardInvariant::holds(&Transition {
            before: &before,
            after: controller.state(),
        }));
    }
}
