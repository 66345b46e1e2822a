//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStorage`] trait, the injectable seam
//! between the theme store and wherever a preference actually lives (a JSON
//! file for the CLI, an in-memory map for tests, browser storage for a web
//! host). The trait is a plain string key-value slot store, nothing more.

use crate::domain::error::Result;

/// Key-value slot storage for persisted UI preferences.
///
/// Implementations are used from the UI thread only and therefore need not
/// be `Send`.
///
/// # Implementations
///
/// - [`JsonStorage`](crate::storage::JsonStorage): JSON file with atomic writes
/// - [`MemoryStorage`](crate::storage::MemoryStorage): shared in-memory map
///
/// # Examples
///
/// ```
/// use dwijabake::storage::{MemoryStorage, PreferenceStorage};
///
/// let mut storage = MemoryStorage::default();
/// storage.set("theme", "dark")?;
/// assert_eq!(storage.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), dwijabake::DwijabakeError>(())
/// ```
pub trait PreferenceStorage {
    /// Reads the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the slot has never been written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrites the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
