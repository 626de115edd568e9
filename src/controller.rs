//! Live game session: board, turn and outcome.
//!
//! [`GameState`] is a plain value with a pure transition; [`Controller`]
//! owns one and is what the view talks to.

use serde::{Deserialize, Serialize};
use tictac_engine::{Board, MoveError, Outcome, Player, Position, apply_move, classify};
use tracing::{debug, info, instrument};

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};

/// Snapshot of a game.
///
/// Deserializing checks the state against [`GameInvariants`]: mark counts,
/// the player to move and the outcome must all agree with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredGameState")]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

/// Wire form of [`GameState`] before validation.
#[derive(Deserialize)]
struct StoredGameState {
    board: Board,
    current_player: Player,
    outcome: Outcome,
}

/// A stored [`GameState`] whose fields disagree with its board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid game state: {violations:?}")]
pub struct InvalidGameState {
    /// Every invariant the state breaks.
    pub violations: Vec<InvariantViolation>,
}

impl std::error::Error for InvalidGameState {}

impl TryFrom<StoredGameState> for GameState {
    type Error = InvalidGameState;

    fn try_from(stored: StoredGameState) -> Result<Self, Self::Error> {
        let state = Self {
            board: stored.board,
            current_player: stored.current_player,
            outcome: stored.outcome,
        };
        GameInvariants::check_all(&state).map_err(|violations| InvalidGameState { violations })?;
        Ok(state)
    }
}

impl GameState {
    /// Empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Plays the current player's mark at `(row, col)` and returns the next state.
    ///
    /// The board is updated, the turn flips, and the outcome is recomputed
    /// from the new board, all in one step. `self` is never modified.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select(&self, row: usize, col: usize) -> Result<Self, MoveError> {
        if self.outcome.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let board = apply_move(&self.board, row, col, self.current_player)?;

        Ok(Self {
            board,
            current_player: self.current_player.opponent(),
            outcome: classify(&board),
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Stateful owner of the game being played.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    state: GameState,
}

impl Controller {
    /// Creates a controller with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Resumes from an existing state.
    ///
    /// A [`GameState`] can only come from a new game, an accepted move or a
    /// validated load, so its invariants already hold.
    pub fn from_state(state: GameState) -> Self {
        Self { state }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Outcome message once the game is over.
    pub fn message(&self) -> Option<String> {
        self.state.outcome().message()
    }

    /// Reset is offered once any mark is on the board.
    pub fn can_reset(&self) -> bool {
        !self.state.board().is_blank()
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// Rejected moves (occupied cell, off the board, game already over)
    /// return the error and leave the state untouched.
    #[instrument(skip(self))]
    pub fn select_move(&mut self, row: usize, col: usize) -> Result<Outcome, MoveError> {
        let next = self.state.select(row, col).inspect_err(|e| {
            debug!(error = %e, "Move rejected");
        })?;

        #[cfg(debug_assertions)]
        crate::invariants::assert_transition(&self.state, &next);

        self.state = next;
        info!(
            next_player = %self.state.current_player(),
            outcome = ?self.state.outcome(),
            "Move applied"
        );
        Ok(self.state.outcome())
    }

    /// Places the current player's mark at a named position.
    pub fn select_position(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        self.select_move(pos.row(), pos.col())
    }

    /// Clears the board and gives X the move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Game reset");
        self.state = GameState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_does_not_modify_original() {
        let state = GameState::new();
        let next = state.select(0, 0).unwrap();
        assert!(state.board().is_blank());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(next.current_player(), Player::O);
    }

    #[test]
    fn test_outcome_is_current_after_winning_move() {
        let mut controller = Controller::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            controller.select_move(row, col).unwrap();
        }
        assert_eq!(controller.select_move(0, 2), Ok(Outcome::Won(Player::X)));
        assert_eq!(controller.message().as_deref(), Some("x wins!"));
    }

    #[test]
    fn test_can_reset_only_after_a_move() {
        let mut controller = Controller::new();
        assert!(!controller.can_reset());
        controller.select_position(Position::Center).unwrap();
        assert!(controller.can_reset());
        controller.reset();
        assert!(!controller.can_reset());
    }
}
