//! Top-level rendering coordinator.
//!
//! Rendering is a two-step process:
//!
//! 1. **View Model Computation**: state → view model
//! 2. **Component Rendering**: view model → ANSI string
//!
//! # Example
//!
//! ```rust
//! use dwijabake::app::{DropdownProps, DropdownState};
//! use dwijabake::ui::{render_dropdown, Palette};
//! use dwijabake::SelectOption;
//!
//! let state = DropdownState::new(
//!     DropdownProps::default(),
//!     vec![SelectOption::new("rye", "Rye")],
//!     vec![],
//! );
//! let frame = render_dropdown(&state, &Palette::default(), 32);
//! assert!(frame.contains("Select…"));
//! ```

use crate::app::{DropdownState, NavDrawer, NAV_LINKS};
use crate::ui::components;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{CartBadge, NavDrawerViewModel, StatusViewModel};

/// Renders a dropdown as a frame starting at the top-left corner.
#[must_use]
pub fn render_dropdown(state: &DropdownState, palette: &Palette, width: usize) -> String {
    let viewmodel = state.compute_viewmodel();

    let mut out = String::new();
    components::render_dropdown(&mut out, 1, &viewmodel, palette, width);
    out
}

/// Renders the status page frame, clearing the screen first.
#[must_use]
pub fn render_status_page(
    status: &StatusViewModel,
    drawer: &NavDrawer,
    cart_count: u32,
    palette: &Palette,
    cols: usize,
) -> String {
    let drawer = NavDrawerViewModel {
        open: drawer.is_open(),
        links: NAV_LINKS.to_vec(),
    };

    let mut out = String::from("\u{1b}[2J");
    components::render_status_page(&mut out, status, &drawer, CartBadge::new(cart_count), palette, cols);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, DropdownProps, Event};
    use crate::domain::{DbCheckResponse, HealthStatus, SelectOption, ThemePreference};
    use crate::ui::viewmodel::ThemeToggleViewModel;

    #[test]
    fn open_dropdown_without_matches_shows_placeholder_row() {
        let mut state = DropdownState::new(
            DropdownProps::default(),
            vec![SelectOption::new("a", "Apple")],
            vec![],
        );
        handle_event(&mut state, &Event::TriggerClicked);
        handle_event(&mut state, &Event::SearchInput("zzz".into()));

        let frame = render_dropdown(&state, &Palette::default(), 30);
        assert!(frame.contains("No options"));
        assert!(!frame.contains("Apple"));
    }

    #[test]
    fn status_page_reports_db_failure() {
        let status = StatusViewModel {
            app_name: "dwijabake",
            api_url: "http://localhost:3001".into(),
            health: Some(HealthStatus::Ok),
            db_loading: false,
            db: Some(DbCheckResponse::failed("connection refused")),
            theme_toggle: ThemeToggleViewModel::for_theme(ThemePreference::Dark),
        };
        let mut drawer = NavDrawer::new();
        drawer.open();

        let frame = render_status_page(&status, &drawer, 0, &Palette::for_theme(ThemePreference::Dark), 60);
        assert!(frame.contains("unreachable: connection refused"));
        assert!(frame.contains("Order"));
        assert!(frame.contains("☀"));
    }
}
