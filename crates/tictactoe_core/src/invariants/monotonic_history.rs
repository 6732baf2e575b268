//! Monotonic history invariant: each snapshot adds exactly one mark.

use super::Invariant;
use crate::rules::check_winner;
use crate::{Board, GameState, Player, Position, Square};

/// Invariant: consecutive snapshots differ by one newly placed mark.
///
/// The mark at step `n` belongs to X when `n` is even, O when odd; existing
/// marks never change; and no snapshot follows a board that already has a
/// winner.
pub struct MonotonicHistoryInvariant;

impl MonotonicHistoryInvariant {
    fn step_holds(step: usize, before: &Board, after: &Board) -> bool {
        if check_winner(before).is_some() {
            return false;
        }

        let mover = Square::Occupied(Player::for_move(step));
        let mut placed = 0;
        for pos in Position::ALL {
            match (before.square(pos), after.square(pos)) {
                (a, b) if a == b => {}
                (Square::Empty, b) if b == mover => placed += 1,
                _ => return false,
            }
        }
        placed == 1
    }
}

impl Invariant<GameState> for MonotonicHistoryInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| Self::step_holds(step, &pair[0], &pair[1]))
    }

    fn description() -> &'static str {
        "Each history step adds exactly one mark by the player whose turn it was"
    }
}
