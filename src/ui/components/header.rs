//! Header bar: site title on the left, cart badge and theme toggle on the
//! right.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Palette;
use crate::ui::viewmodel::{CartBadge, ThemeToggleViewModel};

/// Renders the header at `row` and returns the next free row.
///
/// ```text
///  dwijabake                                  🧺[3] ☾
/// ```
pub fn render_header(
    out: &mut String,
    row: usize,
    title: &str,
    toggle: &ThemeToggleViewModel,
    badge: CartBadge,
    palette: &Palette,
    cols: usize,
) -> usize {
    position_cursor(out, row, 1);
    if let Some(bg) = &palette.colors.header_bg {
        out.push_str(&Palette::bg(bg));
    }

    out.push_str(Palette::bold());
    out.push_str(&Palette::fg(&palette.colors.accent));
    out.push(' ');
    out.push_str(title);
    out.push_str(Palette::reset());

    let cart = badge.icon().glyph();
    let badge_text = badge.text().map(|t| format!("[{t}]"));
    let right_len = cart.chars().count()
        + badge_text.as_ref().map_or(0, |t| t.chars().count())
        + 1
        + toggle.icon.chars().count()
        + 1;
    let used = 1 + title.chars().count() + right_len;

    if let Some(bg) = &palette.colors.header_bg {
        out.push_str(&Palette::bg(bg));
    }
    out.push_str(&" ".repeat(cols.saturating_sub(used)));

    out.push_str(&Palette::fg(&palette.colors.text_fg));
    out.push_str(cart);
    if let Some(text) = badge_text {
        out.push_str(&Palette::fg(&palette.colors.badge_fg));
        out.push_str(&Palette::bg(&palette.colors.badge_bg));
        out.push_str(&text);
        out.push_str(Palette::reset());
    }
    out.push(' ');

    out.push_str(&Palette::fg(&palette.colors.accent));
    out.push_str(toggle.icon);
    out.push(' ');
    out.push_str(Palette::reset());
    row + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemePreference;

    #[test]
    fn hides_badge_for_empty_cart() {
        let palette = Palette::default();
        let toggle = ThemeToggleViewModel::for_theme(ThemePreference::Light);

        let mut out = String::new();
        let next = render_header(&mut out, 1, "dwijabake", &toggle, CartBadge::new(0), &palette, 40);
        assert_eq!(next, 2);
        assert!(out.contains("🛍"));
        assert!(!out.contains("[0]"));
        assert!(!out.contains(&Palette::bg(&palette.colors.badge_bg)));

        let mut out = String::new();
        render_header(&mut out, 1, "dwijabake", &toggle, CartBadge::new(4), &palette, 40);
        assert!(out.contains("🧺"));
        assert!(out.contains("[4]"));

        let mut out = String::new();
        render_header(&mut out, 1, "dwijabake", &toggle, CartBadge::new(42), &palette, 40);
        assert!(out.contains("🛒"));
        assert!(out.contains("[9+]"));
    }
}
