//! Pure tic-tac-toe state model with move history and time travel.
//!
//! # Architecture
//!
//! - **Intent**: [`intent`] turns raw [`UiEvent`]s into typed [`Action`]s.
//! - **Model**: [`reduce`] maps `(GameState, Action)` to the next
//!   [`GameState`]; [`fold`] and [`states`] run it over an action stream.
//! - **Store**: [`Store`] owns one state and notifies listeners.
//! - **Rules** and **invariants**: win/draw detection and the properties every
//!   reduced state satisfies.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Action, Player, fold};
//!
//! let state = fold([0, 1, 4, 2, 8].map(Action::ClickSquare));
//! assert_eq!(state.winner(), Some(Player::X));
//!
//! let rewound = state.apply(Action::ClickMove(3));
//! assert_eq!(rewound.winner(), None);
//! assert_eq!(rewound.turn(), Player::O);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod intent;
mod model;
mod position;
mod store;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Action, UiEvent};
pub use intent::{intent, intents};
pub use model::{GameState, fold, reduce, states};
pub use position::Position;
pub use store::{Listener, Reducer, Store, reducer_for};
pub use types::{Board, BoardError, GameStatus, Player, Square};
