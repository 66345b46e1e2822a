//! Cancelable scheduled tasks.
//!
//! The dropdown never owns a raw timer. Deferred work goes through a
//! [`Scheduler`]: schedule a task with a delay, get a [`TaskHandle`] back,
//! cancel by handle. [`ManualScheduler`] is a virtual-clock implementation:
//! the host advances it with elapsed time and receives the due tasks, which
//! keeps the whole state machine deterministic under test.

use std::time::Duration;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

pub trait Scheduler<T> {
    /// Schedules `task` to become due after `delay`.
    fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle;

    /// Cancels a task. Returns `false` if it already ran or was cancelled.
    fn cancel(&mut self, handle: TaskHandle) -> bool;
}

#[derive(Debug)]
struct Entry<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

/// Scheduler driven by an explicit virtual clock.
#[derive(Debug)]
pub struct ManualScheduler<T> {
    now: Duration,
    next_handle: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for ManualScheduler<T> {
    fn default() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            entries: Vec::new(),
        }
    }
}

impl<T> ManualScheduler<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of tasks still waiting.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    /// Moves the clock forward and returns every task that became due, in
    /// deadline order (ties keep scheduling order).
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        self.now += by;
        let now = self.now;

        let mut due = Vec::new();
        let mut remaining = Vec::with_capacity(self.entries.len());
        for entry in self.entries.drain(..) {
            if entry.due <= now {
                due.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.entries = remaining;

        due.sort_by_key(|entry| (entry.due, entry.handle));
        due.into_iter().map(|entry| entry.task).collect()
    }
}

impl<T> Scheduler<T> for ManualScheduler<T> {
    fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            due: self.now + delay,
            task,
        });
        tracing::trace!(handle = handle.0, delay_ms = delay.as_millis() as u64, "task scheduled");
        handle
    }

    fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_fire_in_deadline_order() {
        let mut scheduler = ManualScheduler::new();
        scheduler.schedule(Duration::from_millis(200), "late");
        scheduler.schedule(Duration::from_millis(100), "early");

        assert!(scheduler.advance(Duration::from_millis(99)).is_empty());
        assert_eq!(scheduler.advance(Duration::from_millis(200)), vec!["early", "late"]);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn cancelled_tasks_never_fire() {
        let mut scheduler = ManualScheduler::new();
        let handle = scheduler.schedule(Duration::from_millis(150), 1);
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));
        assert!(scheduler.advance(Duration::from_secs(1)).is_empty());
    }
}
