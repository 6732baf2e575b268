//! Time-travel tic-tac-toe application.
//!
//! The game logic lives in [`tictactoe_core`]; this crate wires it to the
//! outside world.
//!
//! # Architecture
//!
//! - **CLI**: `play` and `replay` subcommands ([`cli`])
//! - **Settings**: optional TOML file plus `.env` ([`settings`])
//! - **Logging**: tracing subscriber setup ([`logging`])
//! - **Replay**: headless fold of a click script ([`replay`])
//! - **TUI**: terminal view feeding key presses through intent ([`tui`])

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod logging;
pub mod replay;
pub mod settings;
pub mod tui;

pub use settings::{Settings, SettingsError};
