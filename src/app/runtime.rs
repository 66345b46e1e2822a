//! Binds a dropdown state machine to a scheduler and caller callbacks.
//!
//! [`DropdownRuntime`] is the host side of the action protocol: it feeds
//! events into [`handle_event`], executes the returned actions in order and
//! loops timer and frame notifications back in as events.

use super::actions::{Action, CloseToken};
use super::handler::{handle_event, Event};
use super::scheduler::{ManualScheduler, Scheduler, TaskHandle};
use super::state::DropdownState;
use crate::ui::viewmodel::DropdownViewModel;
use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

type ChangeCallback = Box<dyn FnMut(&[String])>;
type SelectCallback = Box<dyn FnMut(&str)>;

pub struct DropdownRuntime<S: Scheduler<Event>> {
    state: DropdownState,
    scheduler: S,
    timers: HashMap<CloseToken, TaskHandle>,
    on_change: ChangeCallback,
    on_select_option: Option<SelectCallback>,
    echo_changes: bool,
    outside_listening: bool,
    frame_requested: bool,
    search_focused: bool,
}

impl<S: Scheduler<Event>> fmt::Debug for DropdownRuntime<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropdownRuntime")
            .field("state", &self.state)
            .field("timers", &self.timers)
            .field("echo_changes", &self.echo_changes)
            .field("outside_listening", &self.outside_listening)
            .field("frame_requested", &self.frame_requested)
            .field("search_focused", &self.search_focused)
            .finish_non_exhaustive()
    }
}

impl<S: Scheduler<Event>> DropdownRuntime<S> {
    /// Creates a runtime that reports selection changes to `on_change`.
    pub fn new(state: DropdownState, scheduler: S, on_change: impl FnMut(&[String]) + 'static) -> Self {
        Self {
            state,
            scheduler,
            timers: HashMap::new(),
            on_change: Box::new(on_change),
            on_select_option: None,
            echo_changes: false,
            outside_listening: false,
            frame_requested: false,
            search_focused: false,
        }
    }

    /// Registers a callback for single-select picks.
    #[must_use]
    pub fn with_on_select_option(mut self, callback: impl FnMut(&str) + 'static) -> Self {
        self.on_select_option = Some(Box::new(callback));
        self
    }

    /// Applies every reported change back to the dropdown immediately, as
    /// an owner that accepts all changes would.
    #[must_use]
    pub const fn echo_changes(mut self, echo: bool) -> Self {
        self.echo_changes = echo;
        self
    }

    #[must_use]
    pub const fn state(&self) -> &DropdownState {
        &self.state
    }

    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[must_use]
    pub const fn is_listening_outside(&self) -> bool {
        self.outside_listening
    }

    #[must_use]
    pub const fn is_frame_requested(&self) -> bool {
        self.frame_requested
    }

    /// Whether focus was moved into the search input since the panel last
    /// opened.
    #[must_use]
    pub const fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    #[must_use]
    pub fn viewmodel(&self) -> DropdownViewModel {
        self.state.compute_viewmodel()
    }

    /// Handles an event and executes the resulting actions. Returns whether
    /// the view needs a re-render.
    pub fn dispatch(&mut self, event: Event) -> bool {
        let (mut needs_render, actions) = handle_event(&mut self.state, &event);
        if !self.state.is_open() {
            self.search_focused = false;
        }

        for action in actions {
            needs_render |= self.execute(action);
        }
        needs_render
    }

    /// Signals that a frame was painted, delivering a pending
    /// [`Action::RequestFrame`].
    pub fn paint(&mut self) -> bool {
        if !self.frame_requested {
            return false;
        }
        self.frame_requested = false;
        self.dispatch(Event::FramePainted)
    }

    fn execute(&mut self, action: Action) -> bool {
        tracing::trace!(action = ?action, "executing action");

        match action {
            Action::Change(next) => {
                (self.on_change)(&next);
                if self.echo_changes {
                    return self.dispatch(Event::ValueChanged(next));
                }
                false
            }
            Action::OptionSelected(id) => {
                if let Some(callback) = self.on_select_option.as_mut() {
                    callback(&id);
                }
                false
            }
            Action::AcquireOutsideInteraction => {
                self.outside_listening = true;
                false
            }
            Action::ReleaseOutsideInteraction => {
                self.outside_listening = false;
                false
            }
            Action::ScheduleClose { token, delay } => {
                let handle = self.scheduler.schedule(delay, Event::ScheduledCloseElapsed(token));
                self.timers.insert(token, handle);
                false
            }
            Action::CancelScheduledClose(token) => {
                if let Some(handle) = self.timers.remove(&token) {
                    self.scheduler.cancel(handle);
                }
                false
            }
            Action::RequestFrame => {
                self.frame_requested = true;
                false
            }
            Action::FocusSearchInput => {
                self.search_focused = true;
                true
            }
        }
    }
}

impl DropdownRuntime<ManualScheduler<Event>> {
    /// Advances the virtual clock and dispatches every timer that fired.
    pub fn advance(&mut self, by: Duration) -> bool {
        let mut needs_render = false;
        for event in self.scheduler.advance(by) {
            if let Event::ScheduledCloseElapsed(token) = &event {
                self.timers.remove(token);
            }
            needs_render |= self.dispatch(event);
        }
        needs_render
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{DropdownProps, Key};
    use crate::domain::SelectOption;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn runtime(props: DropdownProps) -> (DropdownRuntime<ManualScheduler<Event>>, Rc<RefCell<Vec<Vec<String>>>>) {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        let state = DropdownState::new(
            props,
            vec![SelectOption::new("a", "Apple"), SelectOption::new("b", "Banana")],
            vec![],
        );
        let runtime = DropdownRuntime::new(state, ManualScheduler::new(), move |next: &[String]| {
            sink.borrow_mut().push(next.to_vec());
        })
        .echo_changes(true);
        (runtime, changes)
    }

    #[test]
    fn paint_focuses_search() {
        let (mut rt, _) = runtime(DropdownProps::default());
        rt.dispatch(Event::Key(Key::Space));
        assert!(rt.is_frame_requested());
        assert!(!rt.is_search_focused());

        assert!(rt.paint());
        assert!(rt.is_search_focused());
        assert!(!rt.paint());
    }

    #[test]
    fn echo_applies_changes() {
        let (mut rt, changes) = runtime(DropdownProps::default());
        rt.dispatch(Event::TriggerClicked);
        rt.dispatch(Event::OptionClicked("b".into()));
        rt.dispatch(Event::OptionClicked("a".into()));

        assert_eq!(rt.state().value, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(changes.borrow().len(), 2);
        assert_eq!(rt.viewmodel().trigger_label, "2 selected");
    }

    #[test]
    fn hover_close_fires_after_grace_delay() {
        let props = DropdownProps {
            open_on_hover: true,
            ..DropdownProps::default()
        };
        let (mut rt, _) = runtime(props);
        rt.dispatch(Event::PointerEntered);
        rt.dispatch(Event::PointerLeft);

        assert!(!rt.advance(Duration::from_millis(149)));
        assert!(rt.state().is_open());
        assert!(rt.advance(Duration::from_millis(1)));
        assert!(!rt.state().is_open());
        assert!(!rt.is_listening_outside());
        assert_eq!(rt.scheduler().pending(), 0);
    }
}
