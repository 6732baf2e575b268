//! Centralized state container.
//!
//! A [`Store`] is the single owner of the current [`GameState`]. Updates go
//! through [`Store::dispatch`] (typed actions), [`Store::dispatch_event`] (raw
//! view events), or [`Store::apply`] (arbitrary reducer functions). Listeners
//! registered with [`Store::subscribe`] see each new state in order.

use super::action::{Action, UiEvent};
use super::intent::intent;
use super::model::{GameState, reduce};
use tracing::{debug, instrument};

/// A boxed state transition, `state -> state`.
pub type Reducer = Box<dyn FnOnce(&GameState) -> GameState>;

/// Listener invoked with every new state.
pub type Listener = Box<dyn FnMut(&GameState)>;

/// Wraps an action as a [`Reducer`].
pub fn reducer_for(action: Action) -> Reducer {
    Box::new(move |state| reduce(state, action))
}

/// Owns the game state and notifies listeners when it changes.
#[derive(Default)]
pub struct Store {
    state: GameState,
    listeners: Vec<Listener>,
}

impl Store {
    /// Creates a store holding the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `state`.
    pub fn with_state(state: GameState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    /// The current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Registers a listener. Listeners run in registration order.
    pub fn subscribe(&mut self, listener: impl FnMut(&GameState) + 'static) {
        self.listeners.push(Box::new(listener));
        debug!(listeners = self.listeners.len(), "Listener subscribed");
    }

    /// Reduces `action` into the owned state and notifies listeners.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, action: Action) -> &GameState {
        self.apply(reducer_for(action))
    }

    /// Maps a raw view event through [`intent`] and dispatches the result.
    ///
    /// Events that map to no action leave the state alone and notify no one.
    #[instrument(skip(self))]
    pub fn dispatch_event(&mut self, event: UiEvent) -> &GameState {
        match intent(event) {
            Some(action) => self.dispatch(action),
            None => &self.state,
        }
    }

    /// Replaces the owned state with `reducer(state)` and notifies listeners.
    pub fn apply(&mut self, reducer: Reducer) -> &GameState {
        self.state = reducer(&self.state);
        for listener in &mut self.listeners {
            listener(&self.state);
        }
        &self.state
    }

    /// Consumes the store, returning the state it owned.
    pub fn into_state(self) -> GameState {
        self.state
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, fold};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_matches_fold() {
        let actions = [
            Action::ClickSquare(4),
            Action::ClickSquare(0),
            Action::ClickMove(1),
            Action::ClickSquare(8),
        ];
        let mut store = Store::new();
        for action in actions {
            store.dispatch(action);
        }
        assert_eq!(store.state(), &fold(actions));
    }

    #[test]
    fn test_listeners_see_each_state_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = Store::new();

        let first = Rc::clone(&seen);
        store.subscribe(move |state| first.borrow_mut().push(("first", state.move_number())));
        let second = Rc::clone(&seen);
        store.subscribe(move |state| second.borrow_mut().push(("second", state.move_number())));

        store.dispatch(Action::ClickSquare(0));
        store.dispatch(Action::ClickSquare(0));

        assert_eq!(
            *seen.borrow(),
            vec![("first", 1), ("second", 1), ("first", 1), ("second", 1)]
        );
    }

    #[test]
    fn test_dropped_event_notifies_no_one() {
        let count = Rc::new(RefCell::new(0));
        let mut store = Store::new();
        let counter = Rc::clone(&count);
        store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.dispatch_event(UiEvent::Square { name: None });
        assert_eq!(*count.borrow(), 0);

        store.dispatch_event(UiEvent::square("2"));
        assert_eq!(*count.borrow(), 1);
        assert_eq!(store.state().turn(), Player::O);
    }

    #[test]
    fn test_apply_custom_reducer() {
        let mut store = Store::with_state(fold([Action::ClickSquare(0)]));
        store.apply(Box::new(|_| GameState::initial()));
        assert_eq!(store.into_state(), GameState::initial());
    }
}
