//! Panel and selection mode types for the dropdown.
//!
//! # State Machine
//!
//! ```text
//!            click / Enter / Space / pointer enter (hover mode)
//!   Closed ───────────────────────────────────────────────► Open
//!     ▲                                                       │
//!     └─── outside pointer-down / Escape / single-select ─────┘
//!          pick / trigger click / hover-close grace elapsed
//! ```

use serde::{Deserialize, Serialize};

/// Whether the option panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PanelState {
    #[default]
    Closed,
    Open,
}

impl PanelState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// How a pick affects the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// Picks toggle membership; bulk select-all and clear are offered.
    Multi,

    /// A pick replaces the selection, reports the picked id and closes the
    /// panel. Used for navigation-style menus.
    Single,
}

/// Keys the dropdown reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Other,
}

impl Key {
    /// Maps a DOM-style `key` string.
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}
