//! Headless replay of a click script.

use tictactoe_core::{GameState, Player, Position, UiEvent, fold, intents};
use tracing::{debug, instrument};

/// Turns one script token into the raw event a view would report.
///
/// `mN` and `#N` are history-link clicks carrying `N`. A cell label such as
/// `center` becomes a click on that cell. Anything else is a square click
/// carrying the token verbatim.
pub fn parse_click(token: &str) -> UiEvent {
    if let Some(pos) = Position::from_label_or_number(token) {
        return UiEvent::square(pos.to_index().to_string());
    }
    match token.strip_prefix('m').or_else(|| token.strip_prefix('#')) {
        Some(rest) => UiEvent::move_link(rest),
        None => UiEvent::square(token),
    }
}

/// Folds a click script from the start of a game.
#[instrument(skip(clicks))]
pub fn run_script<I, S>(clicks: I) -> GameState
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let events: Vec<UiEvent> = clicks
        .into_iter()
        .map(|token| parse_click(token.as_ref()))
        .collect();
    debug!(events = events.len(), "Replaying click script");
    fold(intents(events))
}

/// Formats a state as the board, the status line, and the move list.
pub fn render_text(state: &GameState) -> String {
    let mut out = state.current().display();
    out.push_str("\n\n");
    out.push_str(&state.status().to_string());
    for (step, pos) in state.moves().iter().enumerate() {
        out.push_str(&format!("\n#{} {} {}", step + 1, Player::for_move(step), pos));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_click() {
        assert_eq!(parse_click("4"), UiEvent::square("4"));
        assert_eq!(parse_click("m2"), UiEvent::move_link("2"));
        assert_eq!(parse_click("#0"), UiEvent::move_link("0"));
        assert_eq!(parse_click("m"), UiEvent::move_link(""));
        assert_eq!(parse_click("Bottom-right"), UiEvent::square("8"));
        assert_eq!(parse_click("middle-left"), UiEvent::square("3"));
        assert_eq!(parse_click("12"), UiEvent::square("12"));
    }

    #[test]
    fn test_run_script_diagonal() {
        let state = run_script(["0", "1", "4", "2", "8"]);
        assert_eq!(state.winner(), Some(Player::X));
    }

    #[test]
    fn test_run_script_rewind_and_garbage() {
        let state = run_script(["4", "0", "oops", "m1", "8", "-3"]);
        assert_eq!(state.moves(), vec![Position::Center, Position::BottomRight]);
        assert_eq!(state.turn(), Player::X);
    }

    #[test]
    fn test_render_text() {
        let state = run_script(["4", "0"]);
        assert_eq!(
            render_text(&state),
            "O|1|2\n-+-+-\n3|X|5\n-+-+-\n6|7|8\n\nNext player: X\n#1 X Center\n#2 O Top-left"
        );
    }
}
