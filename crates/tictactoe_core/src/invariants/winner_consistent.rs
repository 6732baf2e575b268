//! Winner consistency invariant.

use super::Invariant;
use crate::GameState;
use crate::rules::check_winner;

/// Invariant: the recorded winner is the winner of the current board.
pub struct WinnerConsistentInvariant;

impl Invariant<GameState> for WinnerConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state.winner() == check_winner(state.current())
    }

    fn description() -> &'static str {
        "Recorded winner matches the current board"
    }
}
