//! Actions representing side effects requested by the dropdown.
//!
//! The event handler never touches the host directly. It returns a
//! `Vec<Action>` and the host (or [`DropdownRuntime`](crate::app::DropdownRuntime))
//! executes them in order: reporting selection changes to the owner of the
//! value, managing the outside-interaction listener, arming and cancelling
//! the hover-close timer, and deferring focus to the next frame.

use std::time::Duration;

/// Identifies one armed hover-close timer.
///
/// Tokens are allocated by the dropdown state; a timer whose token is no
/// longer the pending one is ignored when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CloseToken(pub u64);

/// Commands produced by [`handle_event`](crate::app::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// The selection should become `next`.
    ///
    /// The dropdown is a controlled component: it does not adopt `next`
    /// itself. The owner applies it and feeds it back with
    /// [`Event::ValueChanged`](crate::app::Event::ValueChanged).
    Change(Vec<String>),

    /// A single-select pick happened. Emitted after `Change`, for consumers
    /// that navigate on selection.
    OptionSelected(String),

    /// Start delivering pointer-downs outside the component's bounds as
    /// [`Event::OutsidePointerDown`](crate::app::Event::OutsidePointerDown).
    AcquireOutsideInteraction,

    /// Stop delivering outside pointer-downs.
    ReleaseOutsideInteraction,

    /// Arm a timer that sends
    /// [`Event::ScheduledCloseElapsed`](crate::app::Event::ScheduledCloseElapsed)
    /// after `delay`.
    ScheduleClose { token: CloseToken, delay: Duration },

    /// Disarm the timer armed with `token`.
    CancelScheduledClose(CloseToken),

    /// Send [`Event::FramePainted`](crate::app::Event::FramePainted) once the
    /// next frame has been rendered.
    RequestFrame,

    /// Move keyboard focus into the search input.
    FocusSearchInput,
}
