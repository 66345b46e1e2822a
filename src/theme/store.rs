//! Theme state store.
//!
//! [`ThemeStore`] is the single source of truth for the active theme during a
//! UI session. It reads and persists the preference through an injected
//! [`PreferenceStorage`], consults an injected [`AmbientPreference`] when
//! nothing valid is persisted, and notifies subscribers synchronously on every
//! change.
//!
//! # Lifecycle
//!
//! ```text
//! new ──► (unmounted: reports Light) ──mount──► resolved theme
//!                                                   │
//!                          set_theme / toggle_theme ┘ (persist + notify)
//! ```
//!
//! The unmounted phase matches what a server render produces, so the first
//! client paint and the server markup agree before the persisted choice is
//! applied.

use crate::domain::ThemePreference;
use crate::storage::PreferenceStorage;
use crate::theme::ambient::AmbientPreference;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Storage slot holding the persisted preference.
pub const STORAGE_KEY: &str = "theme";

/// CSS class toggled on the document root while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Host document root whose class list reflects the active theme.
pub trait DocumentRoot {
    fn toggle_class(&mut self, class: &str, enabled: bool);
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<RefCell<dyn FnMut(ThemePreference)>>;

/// Resolves the theme a fresh session should start with.
///
/// A valid persisted value always wins. An absent, invalid or unreadable
/// value falls back to the ambient signal, and to light when there is none.
/// This never fails.
pub fn get_initial_theme(
    storage: &dyn PreferenceStorage,
    ambient: &dyn AmbientPreference,
) -> ThemePreference {
    let stored = match storage.get(STORAGE_KEY) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read persisted theme, ignoring");
            None
        }
    };

    if let Some(theme) = stored.as_deref().and_then(|v| v.parse::<ThemePreference>().ok()) {
        tracing::debug!(theme = %theme, "using persisted theme");
        return theme;
    }

    if let Some(raw) = stored {
        tracing::debug!(value = %raw, "ignoring invalid persisted theme");
    }

    ambient.preferred().unwrap_or_default()
}

pub struct ThemeStore {
    current: Cell<ThemePreference>,
    mounted: Cell<bool>,
    storage: RefCell<Box<dyn PreferenceStorage>>,
    ambient: Box<dyn AmbientPreference>,
    root: RefCell<Option<Box<dyn DocumentRoot>>>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
}

impl ThemeStore {
    /// Creates an unmounted store. Call [`mount`](Self::mount) once the host
    /// is interactive.
    pub fn new(
        storage: impl PreferenceStorage + 'static,
        ambient: impl AmbientPreference + 'static,
    ) -> Self {
        Self {
            current: Cell::new(ThemePreference::Light),
            mounted: Cell::new(false),
            storage: RefCell::new(Box::new(storage)),
            ambient: Box::new(ambient),
            root: RefCell::new(None),
            subscribers: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Attaches a document root whose `dark` class tracks the theme.
    #[must_use]
    pub fn with_root(self, root: impl DocumentRoot + 'static) -> Self {
        *self.root.borrow_mut() = Some(Box::new(root));
        self
    }

    /// Resolves the initial theme, applies it to the root and notifies
    /// subscribers. Nothing is persisted on mount.
    pub fn mount(&self) -> ThemePreference {
        let initial = {
            let storage = self.storage.borrow();
            get_initial_theme(&**storage, self.ambient.as_ref())
        };
        tracing::debug!(theme = %initial, "theme store mounted");

        self.mounted.set(true);
        self.current.set(initial);
        self.apply_to_root();
        self.notify();
        initial
    }

    /// The theme consumers should render with.
    ///
    /// Reports light until the store is mounted.
    #[must_use]
    pub fn theme(&self) -> ThemePreference {
        if self.mounted.get() {
            self.current.get()
        } else {
            ThemePreference::Light
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.get()
    }

    /// Makes `next` the active theme, persists it and notifies subscribers.
    ///
    /// A failed write is logged; the in-memory update and the notification
    /// still happen. Subscribers may read the store, and may call
    /// `set_theme` again, from inside their callback.
    pub fn set_theme(&self, next: ThemePreference) {
        let _span = tracing::debug_span!("set_theme", from = %self.current.get(), to = %next).entered();

        self.current.set(next);
        self.mounted.set(true);

        let written = self.storage.borrow_mut().set(STORAGE_KEY, next.as_str());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to persist theme");
        }

        self.apply_to_root();
        self.notify();
    }

    pub fn toggle_theme(&self) {
        self.set_theme(self.theme().toggled());
    }

    /// Registers a callback invoked synchronously with every new theme.
    pub fn subscribe(&self, callback: impl FnMut(ThemePreference) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);

        let callback: Subscriber = Rc::new(RefCell::new(callback));
        self.subscribers.borrow_mut().push((id, callback));
        id
    }

    /// Removes a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    fn apply_to_root(&self) {
        let dark = self.current.get().is_dark();
        if let Some(root) = self.root.borrow_mut().as_mut() {
            root.toggle_class(DARK_CLASS, dark);
        }
    }

    /// Calls every subscriber with the current theme. The list is
    /// snapshotted first, so no store borrow is held while callbacks run.
    fn notify(&self) {
        let theme = self.current.get();
        let snapshot: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        tracing::trace!(subscribers = snapshot.len(), theme = %theme, "notifying theme subscribers");

        for callback in snapshot {
            // A callback that sets the theme re-enters here while its own
            // slot is still borrowed; it sees the newest value on return.
            match callback.try_borrow_mut() {
                Ok(mut callback) => (*callback)(theme),
                Err(_) => tracing::debug!("skipping re-entrant theme subscriber"),
            }
        }
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current.get())
            .field("mounted", &self.mounted.get())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{DwijabakeError, Result};
    use crate::storage::MemoryStorage;
    use crate::theme::ambient::FixedAmbient;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct BrokenStorage;

    impl PreferenceStorage for BrokenStorage {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(DwijabakeError::Storage("disk on fire".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(DwijabakeError::Storage("disk on fire".into()))
        }
    }

    #[derive(Clone, Default)]
    struct RecordingRoot(Rc<RefCell<Vec<(String, bool)>>>);

    impl DocumentRoot for RecordingRoot {
        fn toggle_class(&mut self, class: &str, enabled: bool) {
            self.0.borrow_mut().push((class.to_string(), enabled));
        }
    }

    #[test]
    fn reports_light_until_mounted() {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, "dark");
        let store = ThemeStore::new(storage, FixedAmbient(None));
        assert_eq!(store.theme(), ThemePreference::Light);
        assert_eq!(store.mount(), ThemePreference::Dark);
        assert_eq!(store.theme(), ThemePreference::Dark);
    }

    #[test]
    fn set_theme_persists_and_notifies_in_order() {
        let storage = MemoryStorage::default();
        let store = ThemeStore::new(storage.clone(), FixedAmbient(None));
        store.mount();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&seen);
        let second = Rc::clone(&seen);
        store.subscribe(move |t| first.borrow_mut().push(("first", t)));
        store.subscribe(move |t| second.borrow_mut().push(("second", t)));

        store.set_theme(ThemePreference::Dark);

        assert_eq!(storage.get(STORAGE_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(
            *seen.borrow(),
            vec![("first", ThemePreference::Dark), ("second", ThemePreference::Dark)]
        );
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let store = ThemeStore::new(MemoryStorage::default(), FixedAmbient(None));
        let hits = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&hits);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        store.toggle_theme();
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.toggle_theme();

        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn storage_failures_degrade_silently() {
        let store = ThemeStore::new(BrokenStorage, FixedAmbient(Some(ThemePreference::Dark)));
        assert_eq!(store.mount(), ThemePreference::Dark);
        store.toggle_theme();
        assert_eq!(store.theme(), ThemePreference::Light);
    }

    #[test]
    fn root_class_follows_theme() {
        let root = RecordingRoot::default();
        let store =
            ThemeStore::new(MemoryStorage::default(), FixedAmbient(None)).with_root(root.clone());
        store.mount();
        store.toggle_theme();

        assert_eq!(
            *root.0.borrow(),
            vec![("dark".to_string(), false), ("dark".to_string(), true)]
        );
    }
}
