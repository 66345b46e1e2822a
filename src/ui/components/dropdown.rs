//! Dropdown trigger and option panel renderers.

use crate::ui::helpers::{self, fit, position_cursor};
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{DropdownViewModel, OptionRow, PanelViewModel};

use super::search::render_search_box;

/// Renders the trigger button and returns the next free row.
///
/// ```text
/// ┃ 2 selected            ✕ ▾ ┃
/// ```
pub fn render_trigger(out: &mut String, row: usize, vm: &DropdownViewModel, palette: &Palette, width: usize) -> usize {
    let mut suffix = String::new();
    if vm.show_clear_button {
        suffix.push_str(" ✕");
    }
    if vm.show_chevron {
        suffix.push_str(if vm.expanded { " ▴" } else { " ▾" });
    }

    let label_width = width.saturating_sub(4 + suffix.chars().count());
    let edge = if vm.expanded { &palette.colors.accent } else { &palette.colors.border };

    position_cursor(out, row, 1);
    out.push_str(&Palette::fg(edge));
    out.push_str("┃ ");

    if vm.disabled {
        out.push_str(Palette::dim());
    }
    out.push_str(&Palette::fg(&palette.colors.text_fg));
    out.push_str(&fit(&vm.trigger_label, label_width));

    out.push_str(&Palette::fg(&palette.colors.accent));
    out.push_str(&suffix);
    out.push_str(Palette::reset());
    out.push_str(&Palette::fg(edge));
    out.push_str(" ┃");
    out.push_str(Palette::reset());
    row + 1
}

/// Renders the open panel below the trigger and returns the next free row.
pub fn render_panel(out: &mut String, row: usize, panel: &PanelViewModel, palette: &Palette, width: usize) -> usize {
    let inner_width = width.saturating_sub(2);
    let mut current = row;

    current = render_edge(out, current, '┌', '┐', palette, inner_width);

    if let Some(search) = &panel.search {
        current = render_search_box(out, current, search, palette, width);
    }

    if panel.show_bulk_actions {
        position_cursor(out, current, 1);
        out.push_str(&Palette::fg(&palette.colors.border));
        out.push('│');
        out.push_str(&Palette::fg(&palette.colors.accent));
        out.push_str(&fit(" Select all · Clear", inner_width));
        out.push_str(&Palette::fg(&palette.colors.border));
        out.push('│');
        out.push_str(Palette::reset());
        current += 1;
    }

    if let Some(placeholder) = panel.empty_placeholder {
        position_cursor(out, current, 1);
        out.push_str(&Palette::fg(&palette.colors.border));
        out.push('│');
        out.push_str(&Palette::fg(&palette.colors.empty_state_fg));
        out.push_str(&fit(&format!(" {placeholder}"), inner_width));
        out.push_str(&Palette::fg(&palette.colors.border));
        out.push('│');
        out.push_str(Palette::reset());
        current += 1;
    }

    for option in &panel.rows {
        current = render_option_row(out, current, option, palette, inner_width);
    }

    if panel.hidden_rows > 0 {
        position_cursor(out, current, 1);
        out.push_str(&Palette::fg(&palette.colors.border));
        out.push('│');
        out.push_str(&Palette::fg(&palette.colors.text_dim));
        out.push_str(&fit(&format!(" … {} more", panel.hidden_rows), inner_width));
        out.push_str(&Palette::fg(&palette.colors.border));
        out.push('│');
        out.push_str(Palette::reset());
        current += 1;
    }

    render_edge(out, current, '└', '┘', palette, inner_width)
}

fn render_edge(out: &mut String, row: usize, left: char, right: char, palette: &Palette, inner_width: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Palette::fg(&palette.colors.border));
    out.push(left);
    out.push_str(&"─".repeat(inner_width));
    out.push(right);
    out.push_str(Palette::reset());
    row + 1
}

/// One option: checkbox (multi), icon, label with match highlights.
///
/// Selected rows use the selection colors across the full row width.
fn render_option_row(out: &mut String, row: usize, option: &OptionRow, palette: &Palette, inner_width: usize) -> usize {
    position_cursor(out, row, 1);
    out.push_str(&Palette::fg(&palette.colors.border));
    out.push('│');

    if option.selected {
        out.push_str(&Palette::fg(&palette.colors.selection_fg));
        out.push_str(&Palette::bg(&palette.colors.selection_bg));
    } else {
        out.push_str(&Palette::fg(&palette.colors.text_fg));
    }

    let mut prefix = String::from(" ");
    if option.show_checkbox {
        prefix.push_str(if option.selected { "[x] " } else { "[ ] " });
    }
    if let Some(icon) = &option.icon {
        prefix.push_str(icon);
        prefix.push(' ');
    }
    out.push_str(&prefix);

    let label_width = inner_width.saturating_sub(prefix.chars().count());
    let label_len = option.label.chars().count();
    if label_len <= label_width {
        helpers::push_highlighted(out, &option.label, &option.highlight_ranges, palette, option.selected);
        if option.selected {
            out.push_str(&Palette::fg(&palette.colors.selection_fg));
            out.push_str(&Palette::bg(&palette.colors.selection_bg));
        }
        out.push_str(&" ".repeat(label_width - label_len));
    } else {
        out.push_str(&fit(&option.label, label_width));
    }

    out.push_str(Palette::reset());
    out.push_str(&Palette::fg(&palette.colors.border));
    out.push('│');
    out.push_str(Palette::reset());
    row + 1
}
