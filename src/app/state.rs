//! Dropdown state and view model computation.
//!
//! [`DropdownState`] holds everything the multiselect dropdown knows: the
//! caller-supplied props, options and selection (mirrored, never owned), and
//! the ephemeral panel state (open flag, search text, pending hover-close,
//! outside-interaction and focus bookkeeping).
//!
//! # Derived State
//!
//! `filtered_options` is recomputed by [`DropdownState::apply_search_filter`]
//! whenever the options, the search text or the searchable flag change. The
//! selection helpers (`toggled_value`, `select_all_value`, ...) are pure: they
//! compute the next selection and leave applying it to the caller.

use super::actions::CloseToken;
use super::modes::{PanelState, SelectionMode};
use crate::domain::SelectOption;
use crate::ui::viewmodel::{DropdownViewModel, OptionRow, PanelViewModel, SearchBoxViewModel};
use std::collections::HashSet;

/// Placeholder row shown when no option matches.
pub const NO_OPTIONS_LABEL: &str = "No options";

/// Caller-controlled configuration of one dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownProps {
    /// Trigger label when nothing is selected; also the accessible name.
    pub placeholder: String,
    pub search_placeholder: String,
    pub disabled: bool,
    /// Show the search input and filter by it.
    pub searchable: bool,
    pub selection_mode: SelectionMode,
    /// Open on pointer entry, close on pointer exit after a grace delay.
    pub open_on_hover: bool,
    /// Show the chevron (and with it the clear-selection button).
    pub show_chevron: bool,
    /// Maximum number of option rows the panel shows at once.
    pub max_list_height: usize,
}

impl Default for DropdownProps {
    fn default() -> Self {
        Self {
            placeholder: "Select…".to_string(),
            search_placeholder: "Search…".to_string(),
            disabled: false,
            searchable: true,
            selection_mode: SelectionMode::Multi,
            open_on_hover: false,
            show_chevron: true,
            max_list_height: 240,
        }
    }
}

impl DropdownProps {
    #[must_use]
    pub fn single_select() -> Self {
        Self {
            selection_mode: SelectionMode::Single,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn is_multi(&self) -> bool {
        matches!(self.selection_mode, SelectionMode::Multi)
    }
}

/// Filters options by a search string.
///
/// When `searchable` is false or `search` is blank after trimming, the full
/// list is returned. Otherwise an option is kept when its label or id
/// contains the trimmed search text, ignoring case. Order is preserved.
///
/// ```
/// use dwijabake::app::filter_options;
/// use dwijabake::SelectOption;
///
/// let options = vec![SelectOption::new("a", "Apple"), SelectOption::new("b", "Banana")];
/// let hits = filter_options(&options, "  NAN ", true);
/// assert_eq!(hits, vec![SelectOption::new("b", "Banana")]);
/// assert_eq!(filter_options(&options, "   ", true), options);
/// ```
#[must_use]
pub fn filter_options(options: &[SelectOption], search: &str, searchable: bool) -> Vec<SelectOption> {
    let needle = search.trim();
    if !searchable || needle.is_empty() {
        return options.to_vec();
    }

    let needle = needle.to_lowercase();
    options.iter().filter(|o| o.matches(&needle)).cloned().collect()
}

/// Central dropdown state container.
#[derive(Debug, Clone)]
pub struct DropdownState {
    pub props: DropdownProps,

    /// Options in caller order.
    pub options: Vec<SelectOption>,

    /// Mirror of the caller-owned selection, updated only through
    /// `ValueChanged`. May contain ids that no longer exist in `options`.
    pub value: Vec<String>,

    pub panel: PanelState,

    /// Search text; reset whenever the panel opens or closes.
    pub search_text: String,

    /// Options matching the current search. Recomputed by
    /// `apply_search_filter()`.
    pub filtered_options: Vec<SelectOption>,

    pub(crate) pending_close: Option<CloseToken>,
    pub(crate) outside_acquired: bool,
    pub(crate) focus_pending: bool,
    next_token: u64,
}

impl DropdownState {
    #[must_use]
    pub fn new(props: DropdownProps, options: Vec<SelectOption>, value: Vec<String>) -> Self {
        let mut state = Self {
            props,
            options,
            value,
            panel: PanelState::Closed,
            search_text: String::new(),
            filtered_options: Vec::new(),
            pending_close: None,
            outside_acquired: false,
            focus_pending: false,
            next_token: 0,
        };
        state.apply_search_filter();
        state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.panel.is_open()
    }

    /// Whether an outside-interaction listener is currently held.
    #[must_use]
    pub const fn has_outside_listener(&self) -> bool {
        self.outside_acquired
    }

    /// The hover-close timer currently armed, if any.
    #[must_use]
    pub const fn pending_close(&self) -> Option<CloseToken> {
        self.pending_close
    }

    pub(crate) fn allocate_token(&mut self) -> CloseToken {
        let token = CloseToken(self.next_token);
        self.next_token += 1;
        token
    }

    /// Recomputes `filtered_options` from options, search text and the
    /// searchable flag.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::trace_span!("apply_search_filter",
            total_options = self.options.len(),
            query_len = self.search_text.len()
        )
        .entered();

        self.filtered_options = filter_options(&self.options, &self.search_text, self.props.searchable);
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.value.iter().any(|v| v == id)
    }

    /// Selection after picking `id`.
    ///
    /// Multi mode removes `id` if present (keeping the others in order) and
    /// appends it otherwise. Single mode replaces the selection with `[id]`.
    #[must_use]
    pub fn toggled_value(&self, id: &str) -> Vec<String> {
        match self.props.selection_mode {
            SelectionMode::Multi => {
                if self.is_selected(id) {
                    self.value.iter().filter(|v| *v != id).cloned().collect()
                } else {
                    let mut next = self.value.clone();
                    next.push(id.to_string());
                    next
                }
            }
            SelectionMode::Single => vec![id.to_string()],
        }
    }

    /// Selection after "Select all": the current selection followed by every
    /// filtered id not already in it, in filter order.
    #[must_use]
    pub fn select_all_value(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut next = Vec::with_capacity(self.value.len() + self.filtered_options.len());

        let candidates = self
            .value
            .iter()
            .map(String::as_str)
            .chain(self.filtered_options.iter().map(|o| o.id.as_str()));

        for id in candidates {
            if seen.insert(id) {
                next.push(id.to_string());
            }
        }
        next
    }

    /// Selection after "Clear": every selected id outside the filtered set.
    ///
    /// Returns `None` when nothing is filtered, in which case no change is
    /// reported at all.
    #[must_use]
    pub fn clear_filtered_value(&self) -> Option<Vec<String>> {
        if self.filtered_options.is_empty() {
            return None;
        }

        let filtered: HashSet<&str> = self.filtered_options.iter().map(|o| o.id.as_str()).collect();
        Some(
            self.value
                .iter()
                .filter(|v| !filtered.contains(v.as_str()))
                .cloned()
                .collect(),
        )
    }

    /// Options currently selected, in option order. Stale ids are skipped.
    #[must_use]
    pub fn selected_options(&self) -> Vec<&SelectOption> {
        self.options.iter().filter(|o| self.is_selected(&o.id)).collect()
    }

    /// Text shown on the trigger.
    ///
    /// Nothing selected shows the placeholder; one id shows its option's
    /// label; more shows `"{n} selected"` in multi mode and the first
    /// selected option's label in single mode. Stale ids fall back to the
    /// placeholder.
    #[must_use]
    pub fn trigger_label(&self) -> String {
        let first_label = || {
            self.selected_options()
                .first()
                .map_or_else(|| self.props.placeholder.clone(), |o| o.label.clone())
        };

        match self.value.len() {
            0 => self.props.placeholder.clone(),
            1 => first_label(),
            n if self.props.is_multi() => format!("{n} selected"),
            _ => first_label(),
        }
    }

    /// Computes a renderable view model.
    #[must_use]
    pub fn compute_viewmodel(&self) -> DropdownViewModel {
        let panel = self.is_open().then(|| self.compute_panel());

        DropdownViewModel {
            trigger_label: self.trigger_label(),
            accessible_name: self.props.placeholder.clone(),
            expanded: self.is_open(),
            disabled: self.props.disabled,
            show_chevron: self.props.show_chevron,
            show_clear_button: self.props.show_chevron && self.props.is_multi() && !self.value.is_empty(),
            panel,
        }
    }

    fn compute_panel(&self) -> PanelViewModel {
        let search = self.props.searchable.then(|| SearchBoxViewModel {
            query: self.search_text.clone(),
            placeholder: self.props.search_placeholder.clone(),
        });

        let rows = self
            .filtered_options
            .iter()
            .take(self.props.max_list_height)
            .map(|option| OptionRow {
                id: option.id.clone(),
                label: option.label.clone(),
                icon: option.icon.clone(),
                selected: self.is_selected(&option.id),
                show_checkbox: self.props.is_multi(),
                highlight_ranges: self.highlight_ranges(&option.label),
            })
            .collect::<Vec<_>>();

        PanelViewModel {
            search,
            multiselectable: self.props.is_multi(),
            show_bulk_actions: self.props.is_multi(),
            empty_placeholder: self.filtered_options.is_empty().then_some(NO_OPTIONS_LABEL),
            hidden_rows: self.filtered_options.len().saturating_sub(rows.len()),
            rows,
        }
    }

    /// Character ranges of `label` matching the search text, ignoring case.
    fn highlight_ranges(&self, label: &str) -> Vec<(usize, usize)> {
        let needle: Vec<char> = self.search_text.trim().to_lowercase().chars().collect();
        if !self.props.searchable || needle.is_empty() {
            return vec![];
        }

        let haystack: Vec<char> = label.to_lowercase().chars().collect();
        if haystack.len() != label.chars().count() {
            return vec![];
        }

        let mut ranges = Vec::new();
        let mut start = 0;
        while start + needle.len() <= haystack.len() {
            if haystack[start..start + needle.len()] == needle[..] {
                ranges.push((start, start + needle.len()));
                start += needle.len();
            } else {
                start += 1;
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruit() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
            SelectOption::new("c", "Cherry"),
        ]
    }

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn multi_toggle_appends_and_removes_in_place() {
        let state = DropdownState::new(DropdownProps::default(), fruit(), ids(&["c", "a", "b"]));
        assert_eq!(state.toggled_value("a"), ids(&["c", "b"]));

        let state = DropdownState::new(DropdownProps::default(), fruit(), ids(&["c"]));
        assert_eq!(state.toggled_value("a"), ids(&["c", "a"]));
    }

    #[test]
    fn select_all_only_adds_filtered_ids() {
        let mut state = DropdownState::new(DropdownProps::default(), fruit(), ids(&["zz"]));
        state.search_text = "an".into();
        state.apply_search_filter();
        assert_eq!(state.select_all_value(), ids(&["zz", "b"]));
    }

    #[test]
    fn clear_keeps_ids_outside_filter() {
        let mut state = DropdownState::new(DropdownProps::default(), fruit(), ids(&["a", "b", "stale"]));
        state.search_text = "b".into();
        state.apply_search_filter();
        assert_eq!(state.clear_filtered_value(), Some(ids(&["a", "stale"])));

        state.search_text = "nothing matches".into();
        state.apply_search_filter();
        assert_eq!(state.clear_filtered_value(), None);
    }

    #[test]
    fn trigger_label_variants() {
        let mut state = DropdownState::new(DropdownProps::default(), fruit(), vec![]);
        assert_eq!(state.trigger_label(), "Select…");

        state.value = ids(&["b"]);
        assert_eq!(state.trigger_label(), "Banana");

        state.value = ids(&["b", "c"]);
        assert_eq!(state.trigger_label(), "2 selected");

        state.value = ids(&["gone"]);
        assert_eq!(state.trigger_label(), "Select…");

        state.props.selection_mode = SelectionMode::Single;
        state.value = ids(&["c", "b"]);
        assert_eq!(state.trigger_label(), "Banana");
    }

    #[test]
    fn highlight_marks_every_occurrence() {
        let mut state = DropdownState::new(DropdownProps::default(), fruit(), vec![]);
        state.search_text = "AN".into();
        assert_eq!(state.highlight_ranges("Banana"), vec![(1, 3), (3, 5)]);
    }

    #[test]
    fn closed_viewmodel_has_no_panel() {
        let state = DropdownState::new(DropdownProps::default(), fruit(), ids(&["a"]));
        let vm = state.compute_viewmodel();
        assert!(vm.panel.is_none());
        assert!(vm.show_clear_button);
        assert_eq!(vm.trigger_label, "Apple");
    }
}
