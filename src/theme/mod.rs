//! Theme state management.
//!
//! Holds the light/dark preference for a UI session, persists it through the
//! storage layer and notifies dependents when it changes. Storage and the
//! ambient color-scheme signal are injected, so the store runs the same way
//! in a terminal, a browser host or a unit test.
//!
//! # Modules
//!
//! - [`store`]: the store, initial-theme resolution and subscriptions
//! - [`ambient`]: host color-scheme signals
//! - [`scope`]: per-thread scoped access with fail-fast misuse detection

pub mod ambient;
pub mod scope;
pub mod store;

pub use ambient::{AmbientPreference, EnvAmbient, FixedAmbient};
pub use scope::{use_theme, SharedThemeStore, ThemeScope};
pub use store::{get_initial_theme, DocumentRoot, SubscriptionId, ThemeStore, STORAGE_KEY};
