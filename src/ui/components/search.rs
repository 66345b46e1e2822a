//! Search input at the top of an open dropdown panel.

use crate::ui::helpers::{fit, position_cursor};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::SearchBoxViewModel;

/// Renders a one-line bordered search box and returns the next free row.
///
/// The placeholder is shown dimmed while the query is empty.
///
/// ```text
/// │ ⌕ Search…                  │
/// ```
pub fn render_search_box(out: &mut String, row: usize, search: &SearchBoxViewModel, palette: &Palette, width: usize) -> usize {
    let inner_width = width.saturating_sub(4);

    position_cursor(out, row, 1);
    out.push_str(&Palette::fg(&palette.colors.border));
    out.push_str("│ ");

    if search.query.is_empty() {
        out.push_str(&Palette::fg(&palette.colors.text_dim));
        out.push_str(&fit(&format!("⌕ {}", search.placeholder), inner_width));
    } else {
        out.push_str(&Palette::fg(&palette.colors.text_fg));
        out.push_str(&fit(&format!("⌕ {}", search.query), inner_width));
    }

    out.push_str(&Palette::fg(&palette.colors.border));
    out.push_str(" │");
    out.push_str(Palette::reset());
    row + 1
}
