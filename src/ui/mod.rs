//! Terminal rendering layer with component-based architecture.
//!
//! Transforms view models into ANSI-styled frames through composable
//! rendering components, colored by the active [`Palette`].
//!
//! # Architecture
//!
//! ```text
//! DropdownState / StatusBoard → compute_viewmodel → view model → render → ANSI String
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, padding)
//! - [`theme`]: Light/dark palettes and ANSI escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render_dropdown, render_status_page};
pub use theme::{Palette, PaletteColors};
pub use viewmodel::{
    CartBadge, CartIcon, DropdownViewModel, NavDrawerViewModel, OptionRow, PanelViewModel, SearchBoxViewModel,
    StatusViewModel, ThemeToggleViewModel,
};
