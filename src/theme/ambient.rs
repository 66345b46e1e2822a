//! Ambient color-scheme signals.
//!
//! The ambient preference is only consulted when no explicit choice has been
//! persisted. A host that cannot tell (a non-interactive process, a server
//! render) reports `None` and the store settles on light.

use crate::domain::ThemePreference;

/// Environment variable that forces the ambient scheme (`light` or `dark`).
pub const COLOR_SCHEME_VAR: &str = "DWIJABAKE_COLOR_SCHEME";

/// Source of the host environment's preferred color scheme.
pub trait AmbientPreference {
    fn preferred(&self) -> Option<ThemePreference>;
}

/// Ambient signal with a fixed answer. Used by tests and by hosts that
/// resolve the preference up front.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedAmbient(pub Option<ThemePreference>);

impl AmbientPreference for FixedAmbient {
    fn preferred(&self) -> Option<ThemePreference> {
        self.0
    }
}

/// Reads the preference from the process environment.
///
/// `DWIJABAKE_COLOR_SCHEME` wins when it holds a valid literal; otherwise the
/// terminal's `COLORFGBG` background index is used, where the low ANSI
/// colors (0-6 and 8) count as a dark background.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvAmbient;

impl AmbientPreference for EnvAmbient {
    fn preferred(&self) -> Option<ThemePreference> {
        let forced = std::env::var(COLOR_SCHEME_VAR).ok();
        let colorfgbg = std::env::var("COLORFGBG").ok();
        resolve_env(forced.as_deref(), colorfgbg.as_deref())
    }
}

fn resolve_env(forced: Option<&str>, colorfgbg: Option<&str>) -> Option<ThemePreference> {
    if let Some(theme) = forced.and_then(|v| v.trim().parse().ok()) {
        return Some(theme);
    }

    let background: u8 = colorfgbg?.rsplit(';').next()?.trim().parse().ok()?;
    if background <= 6 || background == 8 {
        Some(ThemePreference::Dark)
    } else {
        Some(ThemePreference::Light)
    }
}
