//! Event handling and state transition logic for the dropdown.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the host (pointer, keyboard, timers, new props)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `DropdownState` methods
//! 4. Actions are collected and returned for execution
//!
//! The returned `bool` tells the host whether the view changed and needs a
//! re-render.
//!
//! # Event Types
//!
//! - **Activation**: `TriggerClicked`, `Key`, `PointerEntered`, `PointerLeft`
//! - **Dismissal**: `OutsidePointerDown`, `ScheduledCloseElapsed`, `Unmounted`
//! - **Panel**: `SearchInput`, `OptionClicked`, `SelectAllClicked`,
//!   `ClearFilteredClicked`, `ClearSelectionClicked`, `FramePainted`
//! - **Owner updates**: `ValueChanged`, `OptionsChanged`, `PropsChanged`
//!
//! # Example
//!
//! ```rust
//! use dwijabake::app::{handle_event, Action, DropdownProps, DropdownState, Event};
//! use dwijabake::SelectOption;
//!
//! let options = vec![SelectOption::new("a", "Apple")];
//! let mut state = DropdownState::new(DropdownProps::default(), options, vec![]);
//!
//! let (render, actions) = handle_event(&mut state, &Event::TriggerClicked);
//! assert!(render && state.is_open());
//! assert!(actions.contains(&Action::AcquireOutsideInteraction));
//!
//! let (_, actions) = handle_event(&mut state, &Event::OptionClicked("a".into()));
//! assert_eq!(actions, vec![Action::Change(vec!["a".into()])]);
//! ```

use super::actions::{Action, CloseToken};
use super::modes::{Key, PanelState, SelectionMode};
use super::state::{DropdownProps, DropdownState};
use crate::domain::SelectOption;
use std::time::Duration;

/// Grace period between the pointer leaving a hover-mode dropdown and the
/// panel closing.
pub const HOVER_CLOSE_DELAY: Duration = Duration::from_millis(150);

/// Inputs to the dropdown state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Primary click on the trigger. Toggles the panel.
    TriggerClicked,
    /// Key pressed while the trigger has focus.
    Key(Key),
    /// Pointer entered the trigger or panel.
    PointerEntered,
    /// Pointer left the trigger or panel.
    PointerLeft,
    /// Pointer-down outside both trigger and panel.
    OutsidePointerDown,
    /// A timer armed by [`Action::ScheduleClose`] fired.
    ScheduledCloseElapsed(CloseToken),
    /// The frame requested by [`Action::RequestFrame`] has been painted.
    FramePainted,
    /// The search input now reads this text.
    SearchInput(String),
    /// An option row was activated.
    OptionClicked(String),
    /// "Select all" bulk action.
    SelectAllClicked,
    /// "Clear" bulk action: deselect the filtered options.
    ClearFilteredClicked,
    /// Clear-selection icon on the trigger.
    ClearSelectionClicked,

    /// The owner applied a selection.
    ValueChanged(Vec<String>),
    /// The owner replaced the option list.
    OptionsChanged(Vec<SelectOption>),
    /// The owner replaced the props.
    PropsChanged(DropdownProps),
    /// The dropdown is being torn down.
    Unmounted,
}

/// Processes an event, mutates dropdown state, and returns actions to execute.
///
/// Returns `(needs_render, actions)`. Actions are meant to be executed in
/// order; the list is empty when the event was ignored.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut DropdownState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::TriggerClicked => {
            if state.is_open() {
                (true, close(state))
            } else {
                activate(state)
            }
        }
        Event::Key(Key::Enter | Key::Space) => {
            if state.is_open() {
                return (false, vec![]);
            }
            activate(state)
        }
        Event::Key(Key::Escape) => {
            if !state.is_open() {
                return (false, vec![]);
            }
            (true, close(state))
        }
        Event::Key(Key::Other) => (false, vec![]),
        Event::PointerEntered => {
            if !state.props.open_on_hover {
                return (false, vec![]);
            }

            let mut actions = cancel_pending_close(state);
            if state.is_open() {
                return (false, actions);
            }

            let (render, opened) = activate(state);
            actions.extend(opened);
            (render, actions)
        }
        Event::PointerLeft => {
            if !state.props.open_on_hover || !state.is_open() {
                return (false, vec![]);
            }

            let mut actions = cancel_pending_close(state);
            let token = state.allocate_token();
            state.pending_close = Some(token);
            tracing::trace!(token = token.0, "hover close scheduled");
            actions.push(Action::ScheduleClose {
                token,
                delay: HOVER_CLOSE_DELAY,
            });
            (false, actions)
        }
        Event::ScheduledCloseElapsed(token) => {
            if state.pending_close != Some(*token) {
                tracing::debug!(token = token.0, "stale hover close ignored");
                return (false, vec![]);
            }

            state.pending_close = None;
            if !state.is_open() {
                return (false, vec![]);
            }
            (true, close(state))
        }
        Event::OutsidePointerDown => {
            if !state.outside_acquired || !state.is_open() {
                tracing::trace!("outside pointer-down ignored");
                return (false, vec![]);
            }
            (true, close(state))
        }
        Event::FramePainted => {
            if !state.focus_pending {
                return (false, vec![]);
            }

            state.focus_pending = false;
            if state.is_open() && state.props.searchable {
                (false, vec![Action::FocusSearchInput])
            } else {
                (false, vec![])
            }
        }
        Event::SearchInput(text) => {
            if !state.is_open() || !state.props.searchable {
                return (false, vec![]);
            }

            state.search_text.clone_from(text);
            tracing::trace!(query = %state.search_text, "search query updated");
            state.apply_search_filter();
            (true, vec![])
        }
        Event::OptionClicked(id) => {
            if state.props.disabled {
                return (false, vec![]);
            }

            let next = state.toggled_value(id);
            tracing::debug!(option_id = %id, selected = next.len(), "option toggled");

            match state.props.selection_mode {
                SelectionMode::Multi => (false, vec![Action::Change(next)]),
                SelectionMode::Single => {
                    let mut actions = vec![Action::Change(next), Action::OptionSelected(id.clone())];
                    if state.is_open() {
                        actions.extend(close(state));
                    }
                    (true, actions)
                }
            }
        }
        Event::SelectAllClicked => {
            if !state.props.is_multi() || state.props.disabled {
                return (false, vec![]);
            }
            (false, vec![Action::Change(state.select_all_value())])
        }
        Event::ClearFilteredClicked => {
            if !state.props.is_multi() || state.props.disabled {
                return (false, vec![]);
            }

            state.clear_filtered_value().map_or_else(
                || {
                    tracing::debug!("nothing filtered, clear skipped");
                    (false, vec![])
                },
                |next| (false, vec![Action::Change(next)]),
            )
        }
        Event::ClearSelectionClicked => {
            if !state.props.is_multi() || state.props.disabled {
                return (false, vec![]);
            }
            (false, vec![Action::Change(vec![])])
        }
        Event::ValueChanged(value) => {
            if &state.value == value {
                return (false, vec![]);
            }
            state.value.clone_from(value);
            (true, vec![])
        }
        Event::OptionsChanged(options) => {
            tracing::debug!(total_options = options.len(), "options replaced");
            state.options.clone_from(options);
            state.apply_search_filter();
            (true, vec![])
        }
        Event::PropsChanged(props) => {
            let became_disabled = props.disabled && !state.props.disabled;
            state.props = props.clone();
            state.apply_search_filter();

            if became_disabled && state.is_open() {
                return (true, close(state));
            }
            (true, vec![])
        }
        Event::Unmounted => {
            let mut actions = cancel_pending_close(state);
            if state.outside_acquired {
                state.outside_acquired = false;
                actions.push(Action::ReleaseOutsideInteraction);
            }
            state.focus_pending = false;
            state.panel = PanelState::Closed;
            (false, actions)
        }
    }
}

/// Opens the panel unless disabled.
fn activate(state: &mut DropdownState) -> (bool, Vec<Action>) {
    if state.props.disabled {
        tracing::debug!("activation ignored, dropdown disabled");
        return (false, vec![]);
    }
    (true, open(state))
}

fn open(state: &mut DropdownState) -> Vec<Action> {
    tracing::debug!("panel opened");
    state.panel = PanelState::Open;
    state.search_text.clear();
    state.apply_search_filter();

    let mut actions = Vec::with_capacity(2);
    if !state.outside_acquired {
        state.outside_acquired = true;
        actions.push(Action::AcquireOutsideInteraction);
    }
    if state.props.searchable {
        state.focus_pending = true;
        actions.push(Action::RequestFrame);
    }
    actions
}

fn close(state: &mut DropdownState) -> Vec<Action> {
    tracing::debug!("panel closed");
    state.panel = PanelState::Closed;
    state.search_text.clear();
    state.apply_search_filter();
    state.focus_pending = false;

    let mut actions = cancel_pending_close(state);
    if state.outside_acquired {
        state.outside_acquired = false;
        actions.push(Action::ReleaseOutsideInteraction);
    }
    actions
}

fn cancel_pending_close(state: &mut DropdownState) -> Vec<Action> {
    state
        .pending_close
        .take()
        .map(Action::CancelScheduledClose)
        .into_iter()
        .collect()
}
