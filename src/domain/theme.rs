//! Theme preference value type.
//!
//! The storefront supports exactly two color schemes. The preference is
//! persisted as the literal string `"light"` or `"dark"`, so parsing is
//! strict: anything else is rejected and callers fall back to the ambient
//! signal.

use crate::domain::error::DwijabakeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Two-valued color scheme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Light scheme. Used whenever no other signal is available.
    #[default]
    Light,
    /// Dark scheme. Applied by adding the `dark` class to the document root.
    Dark,
}

impl ThemePreference {
    /// Returns the persisted literal for this preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite preference.
    ///
    /// ```
    /// use dwijabake::ThemePreference;
    ///
    /// assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    /// assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
    /// ```
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = DwijabakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DwijabakeError::Theme(format!("unknown theme value: {other:?}"))),
        }
    }
}
