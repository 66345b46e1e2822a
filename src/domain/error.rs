//! Error types for the storefront core.
//!
//! This module defines the centralized error type [`DwijabakeError`] and a type
//! alias [`Result`] used across the theme store, the probe service and the
//! API client. All errors are implemented with `thiserror`.

use thiserror::Error;

/// The main error type for storefront operations.
///
/// Most variants carry a description string; I/O errors convert automatically
/// through `#[from]`.
///
/// # Examples
///
/// ```
/// use dwijabake::DwijabakeError;
///
/// fn validate() -> Result<(), DwijabakeError> {
///     Err(DwijabakeError::Config("DATABASE_URL: required".to_string()))
/// }
///
/// assert!(validate().is_err());
/// ```
#[derive(Debug, Error)]
pub enum DwijabakeError {
    /// Reading or writing the preference storage failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or socket operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A theme value or palette could not be parsed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration failed validation.
    ///
    /// Fatal at server startup: the process refuses to start.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The theme store was accessed with no active [`crate::theme::ThemeScope`].
    ///
    /// This is a programmer error and is never recovered from silently.
    #[error("use_theme must be used within a ThemeScope")]
    OutsideThemeScope,

    /// A request to the probe service failed.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The probe service could not bind or serve.
    #[error("Server error: {0}")]
    Server(String),

    /// No route matches the request path.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// A specialized `Result` type for storefront operations.
pub type Result<T> = std::result::Result<T, DwijabakeError>;

impl From<reqwest::Error> for DwijabakeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scope_error_names_the_accessor() {
        let err = DwijabakeError::OutsideThemeScope;
        assert_eq!(err.to_string(), "use_theme must be used within a ThemeScope");
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DwijabakeError = io.into();
        assert!(matches!(err, DwijabakeError::Io(_)));
        assert_eq!(err.to_string(), "IO error: gone");
    }
}
