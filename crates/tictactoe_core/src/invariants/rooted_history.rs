//! Rooted history invariant: every game starts from the empty board.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: history is non-empty and its first snapshot is the empty board.
pub struct RootedHistoryInvariant;

impl Invariant<GameState> for RootedHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state.history().first() == Some(&Board::new())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}
