//! dwijabake: the core of a bakery storefront.
//!
//! This crate provides:
//! - A persisted light/dark theme store with change subscriptions and scoped,
//!   fail-fast access
//! - A searchable multiselect dropdown state machine with hover-close,
//!   outside-click dismissal and deferred search focus
//! - A navigation drawer and terminal renderers for the storefront widgets
//! - A backend probe service (`GET /health`, `GET /db`) and its client

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs): serve │ status │ theme              │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌───────────────┐ ┌───────────────┐ ┌───────────────┐
//! │ Widgets       │ │ Theme         │ │ Probe service │
//! │ (app/)        │ │ (theme/)      │ │ (server/,     │
//! │ - Dropdown    │ │ - Store       │ │  client/)     │
//! │ - Scheduler   │ │ - Ambient     │ │ - axum routes │
//! │ - Nav drawer  │ │ - Scope       │ │ - Postgres    │
//! └───────────────┘ └───────────────┘ └───────────────┘
//!         │                 │                 │
//! ┌───────────────┐ ┌───────────────┐         │
//! │ UI Layer      │ │ Storage Layer │         │
//! │ (ui/)         │ │ (storage/)    │         │
//! │ - Palettes    │ │ - JSON file   │         │
//! │ - Components  │ │ - In-memory   │         │
//! └───────────────┘ └───────────────┘         │
//!         │                 │                 │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Errors, theme, options, probe payloads (domain/) │
//! │  - Data directory resolution (infrastructure/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - EnvFilter + fmt to stderr                        │
//! │  - Optional OTLP JSON file export                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Dropdown state machine, scheduler and nav drawer
//! - [`theme`]: Theme store, ambient preference and scoped access
//! - [`domain`]: Core value types and errors
//! - [`storage`]: Preference persistence
//! - [`ui`]: Terminal rendering with light/dark palettes
//! - [`server`]: Probe service
//! - [`client`]: Probe client and status page model
//! - [`infrastructure`]: Filesystem locations
//! - [`observability`]: Tracing setup
//!
//! # Example
//!
//! ```rust
//! use dwijabake::app::{handle_event, DropdownProps, DropdownState, Event};
//! use dwijabake::SelectOption;
//!
//! let options = vec![
//!     SelectOption::new("rye", "Rye"),
//!     SelectOption::new("spelt", "Spelt"),
//! ];
//! let mut state = DropdownState::new(DropdownProps::default(), options, vec![]);
//!
//! handle_event(&mut state, &Event::TriggerClicked);
//! handle_event(&mut state, &Event::SearchInput("sp".into()));
//! assert_eq!(state.filtered_options.len(), 1);
//! ```

pub mod app;
pub mod client;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod server;
pub mod storage;
pub mod theme;
pub mod ui;

pub use app::{handle_event, Action, DropdownProps, DropdownState, Event};
pub use domain::{DwijabakeError, Result, SelectOption, ThemePreference};
pub use theme::{ThemeScope, ThemeStore};
pub use ui::Palette;

use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;

use storage::JsonStorage;
use theme::EnvAmbient;

/// File name of the preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Client-side configuration: where preferences live, how to log, which
/// probe service to talk to and how to color output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON preference file. Default: `<data dir>/preferences.json`.
    pub storage_path: PathBuf,

    /// Tracing filter when `RUST_LOG` is unset. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Enables OTLP JSON span export to this file.
    pub trace_file: Option<PathBuf>,

    /// Probe service base URL.
    pub api_url: String,

    /// Custom palette TOML, used for both themes instead of the built-ins.
    pub palette_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: infrastructure::get_data_dir().join(PREFERENCES_FILE),
            trace_level: None,
            trace_file: None,
            api_url: client::DEFAULT_API_URL.to_string(),
            palette_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map, falling back to defaults
    /// for missing or blank keys.
    ///
    /// Keys: `storage_path`, `trace_level`, `trace_file`, `api_url`,
    /// `palette_file`. Paths starting with `~` are expanded.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use dwijabake::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("api_url".to_string(), "http://api.bake.local".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.api_url, "http://api.bake.local");
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.trace_file.is_none());
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        Self {
            storage_path: get("storage_path").map_or(defaults.storage_path, infrastructure::expand_tilde),
            trace_level: get("trace_level").map(String::from),
            trace_file: get("trace_file").map(infrastructure::expand_tilde),
            api_url: get("api_url").map_or(defaults.api_url, String::from),
            palette_file: get("palette_file").map(infrastructure::expand_tilde),
        }
    }

    /// Reads configuration from the environment.
    ///
    /// | key            | variable                  |
    /// |----------------|---------------------------|
    /// | `storage_path` | `DWIJABAKE_STORAGE_PATH`  |
    /// | `trace_level`  | `DWIJABAKE_TRACE_LEVEL`   |
    /// | `trace_file`   | `DWIJABAKE_TRACE_FILE`    |
    /// | `api_url`      | `NEXT_PUBLIC_API_URL`     |
    /// | `palette_file` | `DWIJABAKE_PALETTE_FILE`  |
    #[must_use]
    pub fn from_env() -> Self {
        let vars = [
            ("storage_path", "DWIJABAKE_STORAGE_PATH"),
            ("trace_level", "DWIJABAKE_TRACE_LEVEL"),
            ("trace_file", "DWIJABAKE_TRACE_FILE"),
            ("api_url", client::API_URL_VAR),
            ("palette_file", "DWIJABAKE_PALETTE_FILE"),
        ];

        let map = vars
            .iter()
            .filter_map(|(key, var)| env::var(var).ok().map(|v| ((*key).to_string(), v)))
            .collect();
        Self::from_map(&map)
    }

    /// Palette for `theme`: the custom file when configured and valid,
    /// otherwise the built-in palette.
    #[must_use]
    pub fn palette(&self, theme: ThemePreference) -> Palette {
        let Some(path) = &self.palette_file else {
            return Palette::for_theme(theme);
        };

        Palette::from_file(path).unwrap_or_else(|e| {
            tracing::warn!(palette_file = %path.display(), error = %e, "failed to load palette, using built-in");
            Palette::for_theme(theme)
        })
    }

    /// Builds an unmounted theme store persisted to `storage_path`, with
    /// the environment as ambient preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the preference file exists but cannot be read or
    /// parsed.
    pub fn open_theme_store(&self) -> Result<ThemeStore> {
        tracing::debug!(storage_path = %self.storage_path.display(), "opening theme store");
        let storage = JsonStorage::new(&self.storage_path)?;
        Ok(ThemeStore::new(storage, EnvAmbient))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let mut map = BTreeMap::new();
        map.insert("api_url".to_string(), "   ".to_string());
        map.insert("storage_path".to_string(), "/tmp/prefs.json".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.api_url, client::DEFAULT_API_URL);
        assert_eq!(config.storage_path, PathBuf::from("/tmp/prefs.json"));
    }

    #[test]
    fn broken_palette_file_falls_back() {
        let config = Config {
            palette_file: Some(PathBuf::from("/definitely/missing/palette.toml")),
            ..Config::default()
        };
        assert_eq!(config.palette(ThemePreference::Dark).name, "dark");
    }

    #[test]
    fn theme_store_persists_between_opens() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            storage_path: dir.path().join(PREFERENCES_FILE),
            ..Config::default()
        };

        {
            let store = config.open_theme_store().unwrap();
            store.mount();
            store.set_theme(ThemePreference::Dark);
        }

        let store = config.open_theme_store().unwrap();
        assert_eq!(store.mount(), ThemePreference::Dark);
    }
}
