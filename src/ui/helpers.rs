//! Shared rendering utilities.
//!
//! Renderers write into a `String` buffer instead of stdout, so output can
//! be inspected in tests and flushed by the caller in one write.

use crate::ui::theme::Palette;

/// Appends a cursor move to `row`, `col` (1-indexed).
pub fn position_cursor(out: &mut String, row: usize, col: usize) {
    out.push_str(&format!("\u{1b}[{row};{col}H"));
}

/// Appends `text` with the given character ranges highlighted.
///
/// Ranges are character indices (not bytes), exclusive end. Highlighting is
/// skipped for selected rows so it does not fight the selection colors.
pub fn push_highlighted(out: &mut String, text: &str, ranges: &[(usize, usize)], palette: &Palette, is_selected: bool) {
    if ranges.is_empty() || is_selected {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current || start >= end {
            continue;
        }

        out.extend(&chars[current..start]);
        out.push_str(&Palette::fg(&palette.colors.match_highlight_fg));
        out.push_str(&Palette::bg(&palette.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Palette::reset());
        out.push_str(&Palette::fg(&palette.colors.text_fg));
        current = end;
    }

    out.extend(&chars[current..]);
}

/// Pads `text` with spaces to `width` characters, truncating with `…` when
/// it does not fit.
#[must_use]
pub fn fit(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len <= width {
        return format!("{text}{}", " ".repeat(width - len));
    }
    if width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(width - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn highlight_wraps_only_matched_chars() {
        let palette = Palette::default();
        let mut out = String::new();
        push_highlighted(&mut out, "Banana", &[(1, 3)], &palette, false);

        assert!(out.starts_with('B'));
        assert!(out.contains("an"));
        assert!(out.ends_with("ana"));
        assert!(out.contains(&Palette::bg(&palette.colors.match_highlight_bg)));
    }

    #[test]
    fn selected_rows_are_plain() {
        let mut out = String::new();
        push_highlighted(&mut out, "Banana", &[(1, 3)], &Palette::default(), true);
        assert_eq!(out, "Banana");
    }

    #[test]
    fn fit_pads_and_truncates() {
        assert_eq!(fit("Rye", 5), "Rye  ");
        assert_eq!(fit("Sourdough", 5), "Sour…");
    }
}
