//! Model: the game state and the reducer that folds actions into it.
//!
//! Every transition is a pure function of `(state, action)`. Nothing here owns
//! state across calls; callers thread the returned value through (see
//! [`fold`], [`states`], or [`Store`](crate::Store)).

use super::action::Action;
use super::position::Position;
use super::rules::{check_winner, is_draw};
use super::types::{Board, GameStatus, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Complete game state.
///
/// `history[0]` is always the empty board and the last entry is the board in
/// play. `turn` is derived from the number of moves made and flips on every
/// accepted click.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) history: Vec<Board>,
    pub(crate) turn: Player,
    pub(crate) winner: Option<Player>,
}

impl GameState {
    /// The state before any move: one empty board, X to play, no winner.
    pub fn initial() -> Self {
        Self {
            history: vec![Board::new()],
            turn: Player::X,
            winner: None,
        }
    }

    /// Board snapshots, oldest first.
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    /// The board currently in play.
    pub fn current(&self) -> &Board {
        // history is never empty; an empty one only comes from a hand-built state
        self.history.last().unwrap_or(&EMPTY_BOARD)
    }

    /// Player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Winner on the current board, if any.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Number of moves that led to the current board.
    pub fn move_number(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Derived game status.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if is_draw(self.current()) => GameStatus::Draw,
            None => GameStatus::InProgress(self.turn),
        }
    }

    /// Positions played, one per history step, recovered from the snapshots.
    pub fn moves(&self) -> Vec<Position> {
        self.history
            .windows(2)
            .filter_map(|pair| placed_between(&pair[0], &pair[1]))
            .collect()
    }

    /// Applies one action. Same as [`reduce`].
    pub fn apply(&self, action: Action) -> Self {
        reduce(self, action)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

static EMPTY_BOARD: Board = Board::new();

/// The single square filled between two consecutive snapshots, if any.
fn placed_between(before: &Board, after: &Board) -> Option<Position> {
    Position::ALL
        .iter()
        .copied()
        .find(|&pos| before.square(pos) == Square::Empty && after.square(pos) != Square::Empty)
}

/// Computes the state that follows `state` under `action`.
///
/// Square clicks are ignored once there is a winner, when the square is
/// taken, or when the index is off the board. A move click truncates history
/// to that move; an unknown move number rewinds to the game start.
#[instrument(skip(state), fields(move_number = state.move_number(), turn = %state.turn))]
pub fn reduce(state: &GameState, action: Action) -> GameState {
    let next = match action {
        Action::ClickSquare(index) => click_square(state, index),
        Action::ClickMove(step) => jump_to(state, step),
    };

    #[cfg(debug_assertions)]
    warn_on_violations(&next);

    next
}

#[cfg(debug_assertions)]
fn warn_on_violations(state: &GameState) {
    use super::invariants::{GameInvariants, InvariantSet};

    if let Err(violations) = GameInvariants::check_all(state) {
        for violation in &violations {
            tracing::warn!(description = %violation.description, "Game invariant violated");
        }
    }
}

fn click_square(state: &GameState, index: usize) -> GameState {
    if state.history.is_empty() {
        debug!(index, "Empty history, playing from the initial state");
        return click_square(&GameState::initial(), index);
    }

    if let Some(winner) = state.winner {
        debug!(%winner, index, "Ignoring click after game is won");
        return state.clone();
    }

    let Some(pos) = Position::from_index(index) else {
        debug!(index, "Ignoring click outside the board");
        return state.clone();
    };

    let board = *state.current();
    if !board.is_empty(pos) {
        debug!(%pos, "Ignoring click on occupied square");
        return state.clone();
    }

    let board = board.with_mark(pos, state.turn);
    let mut history = state.history.clone();
    history.push(board);

    let winner = check_winner(&board);
    debug!(player = %state.turn, %pos, ?winner, "Mark placed");

    GameState {
        history,
        turn: state.turn.opponent(),
        winner,
    }
}

fn jump_to(state: &GameState, step: usize) -> GameState {
    if state.history.is_empty() {
        return GameState::initial();
    }

    let step = if step < state.history.len() {
        step
    } else {
        debug!(step, available = state.history.len(), "Move out of range, rewinding to start");
        0
    };

    let history = state.history[..=step].to_vec();
    let winner = check_winner(&history[step]);
    debug!(step, ?winner, "Rewound history");

    GameState {
        history,
        turn: Player::for_move(step),
        winner,
    }
}

/// Folds a sequence of actions into the state they produce from the start.
#[instrument(skip(actions))]
pub fn fold<I>(actions: I) -> GameState
where
    I: IntoIterator<Item = Action>,
{
    actions
        .into_iter()
        .fold(GameState::initial(), |state, action| reduce(&state, action))
}

/// The state stream: the initial state, then one state per action.
pub fn states<I>(actions: I) -> impl Iterator<Item = GameState>
where
    I: IntoIterator<Item = Action>,
{
    let initial = GameState::initial();
    std::iter::once(initial.clone()).chain(actions.into_iter().scan(initial, |state, action| {
        *state = reduce(state, action);
        Some(state.clone())
    }))
}
