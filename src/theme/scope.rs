//! Scoped access to the active theme store.
//!
//! The render tree root enters a [`ThemeScope`] with the session's store;
//! components deeper in the tree reach it through [`use_theme`]. Calling
//! `use_theme` with no scope entered is a programmer error and fails fast
//! with [`DwijabakeError::OutsideThemeScope`] instead of defaulting.
//!
//! Scopes are per UI thread and nest: dropping an inner scope restores the
//! outer one. The store mutates through `&self`, so a subscriber may read it
//! via `use_theme` while `set_theme` is notifying.

use crate::domain::error::{DwijabakeError, Result};
use crate::theme::store::ThemeStore;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a theme store on the UI thread.
pub type SharedThemeStore = Rc<ThemeStore>;

thread_local! {
    static ACTIVE: RefCell<Option<SharedThemeStore>> = const { RefCell::new(None) };
}

/// Guard that keeps a store installed for the current thread.
#[must_use = "the scope ends as soon as the guard is dropped"]
pub struct ThemeScope {
    previous: Option<SharedThemeStore>,
}

impl ThemeScope {
    /// Installs `store` as the active store until the guard is dropped.
    pub fn enter(store: SharedThemeStore) -> Self {
        let previous = ACTIVE.with(|active| active.borrow_mut().replace(store));
        tracing::trace!(nested = previous.is_some(), "entered theme scope");
        Self { previous }
    }
}

impl Drop for ThemeScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        ACTIVE.with(|active| *active.borrow_mut() = previous);
    }
}

/// Returns the store of the innermost active scope.
///
/// # Errors
///
/// Returns [`DwijabakeError::OutsideThemeScope`] when no scope is active.
///
/// # Examples
///
/// ```
/// use dwijabake::storage::MemoryStorage;
/// use dwijabake::theme::{use_theme, FixedAmbient, ThemeScope, ThemeStore};
/// use std::rc::Rc;
///
/// assert!(use_theme().is_err());
///
/// let store = Rc::new(ThemeStore::new(MemoryStorage::default(), FixedAmbient(None)));
/// let _scope = ThemeScope::enter(Rc::clone(&store));
/// use_theme()?.toggle_theme();
/// # Ok::<(), dwijabake::DwijabakeError>(())
/// ```
pub fn use_theme() -> Result<SharedThemeStore> {
    ACTIVE
        .with(|active| active.borrow().clone())
        .ok_or(DwijabakeError::OutsideThemeScope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemePreference;
    use crate::storage::MemoryStorage;
    use crate::theme::ambient::FixedAmbient;

    fn shared(ambient: Option<ThemePreference>) -> SharedThemeStore {
        let store = ThemeStore::new(MemoryStorage::default(), FixedAmbient(ambient));
        store.mount();
        Rc::new(store)
    }

    #[test]
    fn fails_fast_outside_scope() {
        assert!(matches!(use_theme(), Err(DwijabakeError::OutsideThemeScope)));
    }

    #[test]
    fn nested_scopes_restore_outer_store() {
        let outer = shared(Some(ThemePreference::Light));
        let inner = shared(Some(ThemePreference::Dark));

        let _outer_scope = ThemeScope::enter(outer);
        {
            let _inner_scope = ThemeScope::enter(inner);
            assert_eq!(use_theme().unwrap().theme(), ThemePreference::Dark);
        }
        assert_eq!(use_theme().unwrap().theme(), ThemePreference::Light);
    }

    #[test]
    fn scope_ends_with_guard() {
        {
            let _scope = ThemeScope::enter(shared(None));
            assert!(use_theme().is_ok());
        }
        assert!(use_theme().is_err());
    }

    #[test]
    fn subscribers_can_read_the_store_while_notified() {
        let _scope = ThemeScope::enter(shared(None));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        use_theme().unwrap().subscribe(move |_| {
            let current = use_theme().unwrap().theme();
            sink.borrow_mut().push(current);
        });
        use_theme().unwrap().set_theme(ThemePreference::Dark);
        use_theme().unwrap().toggle_theme();

        assert_eq!(*seen.borrow(), vec![ThemePreference::Dark, ThemePreference::Light]);
    }

    #[test]
    fn subscriber_may_set_theme_again() {
        let _scope = ThemeScope::enter(shared(None));
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);

        use_theme().unwrap().subscribe(move |theme| {
            *counter.borrow_mut() += 1;
            if theme.is_dark() {
                use_theme().unwrap().set_theme(ThemePreference::Light);
            }
        });
        use_theme().unwrap().set_theme(ThemePreference::Dark);

        assert_eq!(use_theme().unwrap().theme(), ThemePreference::Light);
        assert_eq!(*calls.borrow(), 1);
    }
}
