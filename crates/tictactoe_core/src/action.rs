//! First-class action and event types.
//!
//! A [`UiEvent`] is what the view reports: which kind of element was clicked
//! and the raw attribute it carried. An [`Action`] is the typed intent the
//! reducer understands.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A typed user intent consumed by the reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Action {
    /// A board cell was clicked (index 0-8).
    #[display("click square {}", _0)]
    ClickSquare(usize),
    /// A history entry was clicked; rewind to this move number.
    #[display("jump to move {}", _0)]
    ClickMove(usize),
}

/// A raw click reported by the view.
///
/// The payload is the clicked element's attribute, untouched. It may be
/// missing or hold anything at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UiEvent {
    /// Click on a board square.
    Square {
        /// The square's index attribute.
        name: Option<String>,
    },
    /// Click on a history link.
    MoveLink {
        /// The link's move-number attribute.
        name: Option<String>,
    },
}

impl UiEvent {
    /// Square click carrying `name`.
    pub fn square(name: impl Into<String>) -> Self {
        UiEvent::Square {
            name: Some(name.into()),
        }
    }

    /// History-link click carrying `name`.
    pub fn move_link(name: impl Into<String>) -> Self {
        UiEvent::MoveLink {
            name: Some(name.into()),
        }
    }
}
