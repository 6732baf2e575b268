//! Tests for headless replay of click scripts.

use tictactoe_core::{GameState, GameStatus, Player};
use timetravel_tictactoe::replay::{render_text, run_script};

#[test]
fn test_diagonal_win_script() {
    let state = run_script(["0", "1", "4", "2", "8"]);
    assert_eq!(state.status(), GameStatus::Won(Player::X));
    assert!(render_text(&state).starts_with("X|O|O\n-+-+-\n3|X|5\n-+-+-\n6|7|X\n\nWinner: X"));
}

#[test]
fn test_clicks_after_win_are_ignored() {
    let won = run_script(["0", "1", "4", "2", "8"]);
    let more = run_script(["0", "1", "4", "2", "8", "3", "5"]);
    assert_eq!(more, won);
}

#[test]
fn test_rewind_then_replay_branch() {
    let state = run_script(["0", "1", "4", "2", "8", "m2", "5"]);
    assert_eq!(state.history().len(), 4);
    assert_eq!(state.winner(), None);
    assert_eq!(state.turn(), Player::O);
}

#[test]
fn test_malformed_move_restarts() {
    let state = run_script(["4", "0", "mzz"]);
    assert_eq!(state, GameState::initial());
}

#[test]
fn test_json_output_round_trips() {
    let state = run_script(["4", "#0", "8"]);
    let json = serde_json::to_string_pretty(&state).expect("serialize");
    let back: GameState = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, state);
    assert_eq!(back.move_number(), 1);
}
