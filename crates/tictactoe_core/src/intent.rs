//! Intent: raw UI events to typed actions.

use super::action::{Action, UiEvent};
use tracing::{instrument, warn};

/// Parses an attribute payload as a non-negative index.
fn parse_index(raw: Option<&str>) -> Option<usize> {
    raw?.trim().parse::<usize>().ok()
}

/// Maps one raw event to an action.
///
/// A square click whose payload is not a number is dropped. A history click
/// whose payload is not a number falls back to move 0, the game start.
#[instrument]
pub fn intent(event: UiEvent) -> Option<Action> {
    match event {
        UiEvent::Square { name } => match parse_index(name.as_deref()) {
            Some(index) => Some(Action::ClickSquare(index)),
            None => {
                warn!(payload = ?name, "Dropping square click with malformed index");
                None
            }
        },
        UiEvent::MoveLink { name } => match parse_index(name.as_deref()) {
            Some(step) => Some(Action::ClickMove(step)),
            None => {
                warn!(payload = ?name, "Malformed move index, rewinding to game start");
                Some(Action::ClickMove(0))
            }
        },
    }
}

/// Maps an event stream to an action stream, skipping dropped events.
pub fn intents<I>(events: I) -> impl Iterator<Item = Action>
where
    I: IntoIterator<Item = UiEvent>,
{
    events.into_iter().filter_map(intent)
}
