//! Application state and key handling.
//!
//! Keys become the same raw [`UiEvent`]s a clickable view would report, so
//! every state change goes through intent and the store.

use super::input::move_cursor;
use crossterm::event::KeyCode;
use tictactoe_core::{GameState, Position, Store, UiEvent};
use tracing::{debug, info};

/// Main application state.
pub struct App {
    store: Store,
    cursor: Position,
    show_indices: bool,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(show_indices: bool) -> Self {
        let mut store = Store::new();
        store.subscribe(|state: &GameState| {
            info!(
                move_number = state.move_number(),
                status = %state.status(),
                "State updated"
            );
        });
        Self {
            store,
            cursor: Position::Center,
            show_indices,
            should_quit: false,
        }
    }

    /// The current game state.
    pub fn state(&self) -> &GameState {
        self.store.state()
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether empty cells show their index.
    pub fn show_indices(&self) -> bool {
        self.show_indices
    }

    /// Whether the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Maps a key to the raw event it stands for, if any.
    fn event_for(&self, key: KeyCode) -> Option<UiEvent> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => {
                Some(UiEvent::square(self.cursor.to_index().to_string()))
            }
            KeyCode::Char(c) if c.is_ascii_digit() => Some(UiEvent::move_link(c.to_string())),
            KeyCode::Char('u') => {
                let previous = self.state().move_number().saturating_sub(1);
                Some(UiEvent::move_link(previous.to_string()))
            }
            KeyCode::Char('r') => Some(UiEvent::move_link("0")),
            _ => None,
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => match self.event_for(key) {
                Some(event) => {
                    self.store.dispatch_event(event);
                }
                None => debug!(?key, "Unbound key"),
            },
        }
    }
}
