//! Color palettes and ANSI escape sequence generation.
//!
//! Each [`ThemePreference`] maps to a built-in palette; a custom palette can
//! be loaded from a TOML file instead.
//!
//! # TOML Format
//!
//! ```toml
//! name = "light"
//!
//! [colors]
//! text_fg = "#3b2a1e"
//! text_dim = "#8a7565"
//! accent = "#b5651d"
//! border = "#d9c7b3"
//! selection_fg = "#fffaf3"
//! selection_bg = "#b5651d"
//! match_highlight_fg = "#3b2a1e"
//! match_highlight_bg = "#f6d58e"
//! empty_state_fg = "#8a7565"
//! success_fg = "#3f7d3a"
//! error_fg = "#b3261e"
//! badge_fg = "#fffaf3"
//! badge_bg = "#c2410c"
//! ```
//!
//! # Example
//!
//! ```rust
//! use dwijabake::ui::Palette;
//! use dwijabake::ThemePreference;
//!
//! let palette = Palette::for_theme(ThemePreference::Dark);
//! assert_eq!(palette.name, "dark");
//! let styled = format!("{}Bold{}", Palette::bold(), Palette::reset());
//! assert!(styled.ends_with("\u{1b}[0m"));
//! ```

use crate::domain::error::{DwijabakeError, Result};
use crate::domain::ThemePreference;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const LIGHT_TOML: &str = include_str!("../../themes/light.toml");
const DARK_TOML: &str = include_str!("../../themes/dark.toml");

/// A named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Palette {
    pub name: String,
    pub colors: PaletteColors,
}

/// Hex colors (e.g. `"#b5651d"`) for every rendered element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PaletteColors {
    pub text_fg: String,
    /// Secondary text: placeholders, hints, hidden-row counts.
    pub text_dim: String,
    /// Optional page background.
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Titles, chevrons and the active trigger.
    pub accent: String,
    pub border: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    /// The "No options" row.
    pub empty_state_fg: String,

    pub success_fg: String,
    pub error_fg: String,

    pub badge_fg: String,
    pub badge_bg: String,
}

impl Palette {
    /// Loads a built-in palette by name (`light` or `dark`).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => LIGHT_TOML,
            "dark" => DARK_TOML,
            _ => return None,
        };

        match toml::from_str(toml_str) {
            Ok(palette) => Some(palette),
            Err(e) => {
                tracing::error!(palette = name, error = %e, "built-in palette failed to parse");
                None
            }
        }
    }

    /// The built-in palette for a theme.
    #[must_use]
    pub fn for_theme(theme: ThemePreference) -> Self {
        Self::from_name(theme.as_str()).unwrap_or_else(Self::fallback)
    }

    /// Loads a palette from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`DwijabakeError::Io`] if the file cannot be read and
    /// [`DwijabakeError::Theme`] if it is not a valid palette.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        toml::from_str(&contents)
            .map_err(|e| DwijabakeError::Theme(format!("invalid palette {}: {e}", path.display())))
    }

    /// Monochrome palette used if a built-in palette is unusable.
    fn fallback() -> Self {
        let white = "#ffffff".to_string();
        let grey = "#808080".to_string();
        let black = "#000000".to_string();
        Self {
            name: "fallback".to_string(),
            colors: PaletteColors {
                text_fg: white.clone(),
                text_dim: grey.clone(),
                header_bg: None,
                accent: white.clone(),
                border: grey.clone(),
                selection_fg: black.clone(),
                selection_bg: white.clone(),
                match_highlight_fg: black.clone(),
                match_highlight_bg: grey.clone(),
                empty_state_fg: grey,
                success_fg: white.clone(),
                error_fg: white.clone(),
                badge_fg: black,
                badge_bg: white,
            },
        }
    }

    /// Converts a hex color to an RGB tuple, falling back to white on bad
    /// input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`).
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`).
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_theme(ThemePreference::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn built_in_palettes_parse() {
        assert_eq!(Palette::for_theme(ThemePreference::Light).name, "light");
        assert_eq!(Palette::for_theme(ThemePreference::Dark).name, "dark");
        assert!(Palette::from_name("solarized").is_none());
    }

    #[test]
    fn hex_conversion_tolerates_garbage() {
        assert_eq!(Palette::fg("#b5651d"), "\u{1b}[38;2;181;101;29m");
        assert_eq!(Palette::bg("nope"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn custom_palette_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let custom = DARK_TOML.replace("name = \"dark\"", "name = \"midnight\"");
        file.write_all(custom.as_bytes()).expect("write palette");

        let palette = Palette::from_file(file.path()).expect("palette loads");
        assert_eq!(palette.name, "midnight");
        assert_eq!(palette.colors.header_bg.as_deref(), Some("#1f1812"));
    }

    #[test]
    fn malformed_palette_is_a_theme_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"name = 3").expect("write palette");

        let err = Palette::from_file(file.path()).expect_err("must fail");
        assert!(matches!(err, DwijabakeError::Theme(_)));
    }
}
