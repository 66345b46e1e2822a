//! Storage layer for persisted UI preferences.
//!
//! The theme store reads and writes its single slot through the
//! [`PreferenceStorage`] trait, so the backing store is chosen by whoever
//! builds the store.
//!
//! # Modules
//!
//! - `backend`: the storage trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: shared in-memory implementation

pub mod backend;
pub mod json;
pub mod memory;

pub use backend::PreferenceStorage;
pub use json::JsonStorage;
pub use memory::MemoryStorage;
