//! Selectable option model for the multiselect dropdown.

use serde::{Deserialize, Serialize};

/// One entry in a dropdown's option list.
///
/// `id` is the value reported through selection changes; `label` is what the
/// user sees. Both participate in search matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: String,
    pub label: String,
    /// Optional glyph rendered before the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SelectOption {
    /// Creates an option without an icon.
    ///
    /// ```
    /// use dwijabake::SelectOption;
    ///
    /// let option = SelectOption::new("sourdough", "Sourdough Loaf");
    /// assert_eq!(option.id, "sourdough");
    /// assert!(option.icon.is_none());
    /// ```
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Case-insensitive substring match on label or id.
    ///
    /// `needle` must already be trimmed and lowercased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        self.label.to_lowercase().contains(needle) || self.id.to_lowercase().contains(needle)
    }
}
