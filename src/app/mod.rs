//! Interactive widget logic: the multiselect dropdown and the nav drawer.
//!
//! This layer sits between a host (terminal loop, browser shim, test) and
//! the rendering layer. It implements the event-driven architecture behind
//! the storefront's filter dropdowns.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! Host Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                  ↓
//!                           └──── Timers / Frames / Owner ─────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Panel and selection mode types
//! - [`state`]: Dropdown state container and view model computation
//! - [`scheduler`]: Cancelable deferred tasks
//! - [`runtime`]: Action executor binding state, scheduler and callbacks
//! - [`drawer`]: Navigation drawer

pub mod actions;
pub mod drawer;
pub mod handler;
pub mod modes;
pub mod runtime;
pub mod scheduler;
pub mod state;

pub use actions::{Action, CloseToken};
pub use drawer::{NavDrawer, NavLink, NAV_LINKS};
pub use handler::{handle_event, Event, HOVER_CLOSE_DELAY};
pub use modes::{Key, PanelState, SelectionMode};
pub use runtime::DropdownRuntime;
pub use scheduler::{ManualScheduler, Scheduler, TaskHandle};
pub use state::{filter_options, DropdownProps, DropdownState, NO_OPTIONS_LABEL};
