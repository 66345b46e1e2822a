//! Navigation drawer renderer.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::NavDrawerViewModel;

/// Renders the drawer's link list when open. A closed drawer renders
/// nothing and returns `row` unchanged.
pub fn render_nav_drawer(out: &mut String, row: usize, drawer: &NavDrawerViewModel, palette: &Palette, width: usize) -> usize {
    if !drawer.open {
        return row;
    }

    let mut current = row;
    for (index, link) in drawer.links.iter().enumerate() {
        position_cursor(out, current, 1);
        out.push_str(&Palette::fg(&palette.colors.text_dim));
        out.push_str(&format!(" {}. ", index + 1));
        out.push_str(&Palette::fg(&palette.colors.text_fg));
        out.push_str(&fit(link.label, width.saturating_sub(4)));
        out.push_str(Palette::reset());
        current += 1;
    }
    current
}
