//! First-class invariants for the game state.
//!
//! Invariants are logical properties that every state produced by the
//! reducer must satisfy. Debug builds check them after each reduction; tests
//! check them directly.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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
/// Implemented for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();

                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+

                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod alternating_turn;
pub mod monotonic_history;
pub mod rooted_history;
pub mod winner_consistent;

pub use alternating_turn::AlternatingTurnInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use rooted_history::RootedHistoryInvariant;
pub use winner_consistent::WinnerConsistentInvariant;

/// All game-state invariants as a composable set.
pub type GameInvariants = (
    RootedHistoryInvariant,
    AlternatingTurnInvariant,
    MonotonicHistoryInvariant,
    WinnerConsistentInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Action, Board, GameState, Player, Position, fold};

    #[test]
    fn test_invariant_set_holds_for_initial_state() {
        assert!(GameInvariants::check_all(&GameState::initial()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_rewinds() {
        let state = fold([
            Action::ClickSquare(0),
            Action::ClickSquare(4),
            Action::ClickSquare(8),
            Action::ClickMove(1),
            Action::ClickSquare(2),
            Action::ClickSquare(2),
        ]);
        assert!(GameInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = fold([Action::ClickSquare(4)]);
        // O's mark appears from nowhere and the turn is left unflipped.
        state.history[1] = state.history[1].with_mark(Position::TopLeft, Player::O);
        state.turn = Player::X;

        let violations = GameInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(
            AlternatingTurnInvariant::description()
        )));
        assert!(violations.contains(&InvariantViolation::new(
            MonotonicHistoryInvariant::description()
        )));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type Pair = (RootedHistoryInvariant, WinnerConsistentInvariant);
        let mut state = GameState::initial();
        assert!(Pair::check_all(&state).is_ok());

        state.history[0] = Board::new().with_mark(Position::Center, Player::X);
        assert_eq!(Pair::check_all(&state).unwrap_err().len(), 1);
    }
}
