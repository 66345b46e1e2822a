//! Domain layer for the storefront core.
//!
//! Core value types shared by the UI state components, the probe service and
//! its client. Nothing here depends on a UI host, the network or storage.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`theme`]: The two-valued theme preference
//! - [`option`]: Dropdown option model
//! - [`probe`]: Health and database probe payloads

pub mod error;
pub mod option;
pub mod probe;
pub mod theme;

pub use error::{DwijabakeError, Result};
pub use option::SelectOption;
pub use probe::{DbCheckResponse, HealthResponse, HealthStatus, APP_NAME};
pub use theme::ThemePreference;
