//! Composable UI component renderers.
//!
//! Each component writes ANSI-styled output for one part of the interface
//! into a `String` buffer and returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title bar with cart badge and theme toggle
//! - [`dropdown`]: Dropdown trigger and option panel
//! - [`search`]: Search input inside the panel
//! - [`drawer`]: Navigation drawer links
//! - [`status`]: Backend status lines
//!
//! # Layouts
//!
//! - [`render_dropdown`]: Trigger + panel (when open)
//! - [`render_status_page`]: Header + Border + Drawer + Status + Border

mod drawer;
mod dropdown;
mod header;
mod search;
mod status;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{CartBadge, DropdownViewModel, NavDrawerViewModel, StatusViewModel};

use drawer::render_nav_drawer;
use dropdown::{render_panel, render_trigger};
use header::render_header;
use status::render_status;

/// Renders a horizontal border line and returns the next free row.
fn render_border(out: &mut String, row: usize, color: &str, cols: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Palette::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Palette::reset());
    row + 1
}

/// Renders a dropdown starting at `row`.
///
/// ```text
/// [Trigger]
/// [Panel: search, bulk actions, option rows]   (open only)
/// ```
pub fn render_dropdown(out: &mut String, row: usize, vm: &DropdownViewModel, palette: &Palette, width: usize) -> usize {
    let current = render_trigger(out, row, vm, palette, width);
    match &vm.panel {
        Some(panel) => render_panel(out, current, panel, palette, width),
        None => current,
    }
}

/// Renders the full status page.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Drawer links]    (open only)
/// [Status lines]
/// [Border]
/// ```
pub fn render_status_page(
    out: &mut String,
    vm: &StatusViewModel,
    drawer: &NavDrawerViewModel,
    badge: CartBadge,
    palette: &Palette,
    cols: usize,
) -> usize {
    let mut current_row = 2;

    current_row = render_header(out, current_row, vm.app_name, &vm.theme_toggle, badge, palette, cols);
    current_row = render_border(out, current_row, &palette.colors.border, cols);
    current_row = render_nav_drawer(out, current_row, drawer, palette, cols);
    current_row = render_status(out, current_row, vm, palette);
    render_border(out, current_row, &palette.colors.border, cols)
}
