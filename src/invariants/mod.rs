//! Invariants of a tic-tac-toe session.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The controller checks them in debug builds, every deserialized
//! `GameState` is checked against them, and tests check them directly.

mod mark_balance;
mod monotonic_board;
mod outcome_current;
mod turn_order;

pub use mark_balance::MarkBalanceInvariant;
pub use monotonic_board::MonotonicBoardInvariant;
pub use outcome_current::OutcomeCurrentInvariant;
pub use turn_order::TurnOrderInvariant;

use crate::GameState;
use tracing::error;

/// A logical property that must hold for a given state.
pub trait Invariant<S: ?Sized> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for triples of [`Invariant`]s.
pub trait InvariantSet<S: ?Sized> {
    /// Returns every violated invariant, or `Ok(())` if all hold.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(results: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = results
        .iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    S: ?Sized,
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        collect(&[
            (I1::holds(state), I1::description()),
            (I2::holds(state), I2::description()),
            (I3::holds(state), I3::description()),
        ])
    }
}

/// Invariants that hold for every reachable [`GameState`].
pub type GameInvariants = (
    MarkBalanceInvariant,
    TurnOrderInvariant,
    OutcomeCurrentInvariant,
);

/// A single accepted move, seen from both sides.
#[derive(Debug, Clone, Copy)]
pub struct Transition<'a> {
    /// State before the move.
    pub before: &'a GameState,
    /// State after the move.
    pub after: &'a GameState,
}

/// Checks the state invariants on `after` and the transition invariant
/// between the two states.
pub fn check_transition(
    before: &GameState,
    after: &GameState,
) -> Result<(), Vec<InvariantViolation>> {
    let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();
    if !MonotonicBoardInvariant::holds(&Transition { before, after }) {
        violations.push(InvariantViolation::new(
            <MonotonicBoardInvariant as Invariant<Transition<'_>>>::description(),
        ));
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Logs and debug-asserts on any violation.
#[cfg_attr(not(debug_assertions), allow(dead_code))]
pub(crate) fn assert_transition(before: &GameState, after: &GameState) {
    if let Err(violations) = check_transition(before, after) {
        for violation in &violations {
            error!(%violation, "Invariant violated");
        }
        debug_assert!(violations.is_empty(), "invariants violated: {violations:?}");
    }
}
