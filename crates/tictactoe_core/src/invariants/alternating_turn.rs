//! Alternating turn invariant: X moves on even steps, O on odd ones.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the player to move matches the parity of the move number.
///
/// This holds after a win too: the winning click still hands the turn over.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.turn() == Player::for_move(state.move_number())
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
