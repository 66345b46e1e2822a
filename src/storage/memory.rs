//! In-memory preference storage.
//!
//! Clones share the same map, so a test can keep one handle for inspection
//! while the theme store owns another.

use crate::domain::error::Result;
use crate::storage::backend::PreferenceStorage;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates storage pre-populated with a single slot.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::default();
        storage.entries.borrow_mut().insert(key.into(), value.into());
        storage
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        tracing::trace!(key = %key, value = %value, "memory storage write");
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let observer = MemoryStorage::default();
        let mut writer = observer.clone();
        writer.set("theme", "dark").unwrap();
        assert_eq!(observer.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(observer.len(), 1);
    }
}
