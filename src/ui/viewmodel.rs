//! View model types representing renderable UI state.
//!
//! View models are immutable snapshots computed from state
//! (`DropdownState::compute_viewmodel`, `StatusBoard::compute_viewmodel`,
//! ...) and consumed by the renderers. They contain no business logic, only
//! display-ready data.
//!
//! # Example
//!
//! ```rust
//! use dwijabake::ui::viewmodel::{CartBadge, ThemeToggleViewModel};
//! use dwijabake::ThemePreference;
//!
//! let toggle = ThemeToggleViewModel::for_theme(ThemePreference::Light);
//! assert_eq!(toggle.label, "Switch to dark theme");
//!
//! assert_eq!(CartBadge::new(0).text(), None);
//! assert_eq!(CartBadge::new(12).text().as_deref(), Some("9+"));
//! assert_eq!(CartBadge::new(12).label(), "Cart (12 items)");
//! ```

use crate::app::NavLink;
use crate::domain::{DbCheckResponse, HealthStatus, ThemePreference};

/// Renderable state of a dropdown trigger and, when open, its panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownViewModel {
    pub trigger_label: String,
    /// Accessible name of the trigger (the placeholder).
    pub accessible_name: String,
    pub expanded: bool,
    pub disabled: bool,
    pub show_chevron: bool,
    /// Clear-selection icon, shown for non-empty multi selections.
    pub show_clear_button: bool,
    pub panel: Option<PanelViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelViewModel {
    /// Present when the dropdown is searchable.
    pub search: Option<SearchBoxViewModel>,
    pub multiselectable: bool,
    /// "Select all" and "Clear" buttons.
    pub show_bulk_actions: bool,
    pub rows: Vec<OptionRow>,
    /// Filtered options beyond the list height.
    pub hidden_rows: usize,
    /// Non-interactive row shown when nothing matches.
    pub empty_placeholder: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxViewModel {
    pub query: String,
    pub placeholder: String,
}

/// One option row in the panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
    pub selected: bool,
    pub show_checkbox: bool,
    /// Character ranges of `label` matching the search, `(start, end)` with
    /// exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The theme toggle button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeToggleViewModel {
    /// Accessible label naming the theme a click switches to.
    pub label: String,
    /// Icon for the current theme: moon while light, sun while dark.
    pub icon: &'static str,
}

impl ThemeToggleViewModel {
    #[must_use]
    pub fn for_theme(current: ThemePreference) -> Self {
        let icon = if current.is_dark() { "☀" } else { "☾" };
        Self {
            label: format!("Switch to {} theme", current.toggled()),
            icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavDrawerViewModel {
    pub open: bool,
    pub links: Vec<NavLink>,
}

/// Cart glyph, growing with the number of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartIcon {
    Bag,
    Basket,
    Cart,
}

impl CartIcon {
    #[must_use]
    pub const fn for_count(count: u32) -> Self {
        match count {
            0..=2 => Self::Bag,
            3..=5 => Self::Basket,
            _ => Self::Cart,
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Bag => "🛍",
            Self::Basket => "🧺",
            Self::Cart => "🛒",
        }
    }
}

/// Item count badge on the cart icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartBadge {
    pub count: u32,
}

impl CartBadge {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Badge text; `None` hides the badge. Counts above nine read `9+`.
    #[must_use]
    pub fn text(self) -> Option<String> {
        match self.count {
            0 => None,
            1..=9 => Some(self.count.to_string()),
            _ => Some("9+".to_string()),
        }
    }

    #[must_use]
    pub const fn icon(self) -> CartIcon {
        CartIcon::for_count(self.count)
    }

    /// Accessible name of the cart link.
    #[must_use]
    pub fn label(self) -> String {
        if self.count == 0 {
            "Cart".to_string()
        } else {
            format!("Cart ({} items)", self.count)
        }
    }
}

/// Backend status page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusViewModel {
    pub app_name: &'static str,
    pub api_url: String,
    /// `None` until the first health check resolves.
    pub health: Option<HealthStatus>,
    pub db_loading: bool,
    pub db: Option<DbCheckResponse>,
    pub theme_toggle: ThemeToggleViewModel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_caps_at_nine() {
        assert_eq!(CartBadge::new(9).text().as_deref(), Some("9"));
        assert_eq!(CartBadge::new(10).text().as_deref(), Some("9+"));
        assert_eq!(CartBadge::new(0).label(), "Cart");
        assert_eq!(CartBadge::new(3).label(), "Cart (3 items)");
    }

    #[test]
    fn cart_icon_grows_with_count() {
        assert_eq!(CartBadge::new(0).icon(), CartIcon::Bag);
        assert_eq!(CartBadge::new(2).icon(), CartIcon::Bag);
        assert_eq!(CartBadge::new(3).icon(), CartIcon::Basket);
        assert_eq!(CartBadge::new(5).icon(), CartIcon::Basket);
        assert_eq!(CartBadge::new(6).icon(), CartIcon::Cart);
    }

    #[test]
    fn toggle_shows_moon_in_light_and_sun_in_dark() {
        let light = ThemeToggleViewModel::for_theme(ThemePreference::Light);
        assert_eq!(light.icon, "☾");
        assert_eq!(light.label, "Switch to dark theme");

        let dark = ThemeToggleViewModel::for_theme(ThemePreference::Dark);
        assert_eq!(dark.icon, "☀");
        assert_eq!(dark.label, "Switch to light theme");
    }
}
