//! Probe service configuration.
//!
//! Values come from the process environment, then `.env`, then `../../.env`
//! (the first source that defines a key wins). Every key is validated up
//! front; any problem is fatal and reported all at once.

use crate::domain::error::{DwijabakeError, Result};
use std::collections::BTreeMap;
use std::env;
use std::path::Path;
use url::Url;

/// Dotenv files consulted after the process environment, highest priority
/// first.
pub const ENV_FILES: [&str; 2] = [".env", "../../.env"];

const DEFAULT_NODE_ENV: &str = "development";
const DEFAULT_API_PORT: u16 = 3001;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Deployment environment label (`NODE_ENV`).
    pub node_env: String,
    /// Listening port (`API_PORT`).
    pub api_port: u16,
    /// The single origin allowed by CORS (`CORS_ORIGIN`).
    pub cors_origin: Url,
    /// Postgres connection URL (`DATABASE_URL`).
    pub database_url: Url,
}

impl ServerConfig {
    /// Loads and validates configuration from the environment and the
    /// dotenv files.
    ///
    /// # Errors
    ///
    /// Returns [`DwijabakeError::Config`] listing every invalid or missing
    /// key.
    pub fn load() -> Result<Self> {
        let mut values = BTreeMap::new();

        for file in ENV_FILES.iter().rev() {
            values.extend(read_env_file(Path::new(file)));
        }
        values.extend(env::vars());

        Self::from_map(&values)
    }

    /// Validates configuration from a key/value map.
    ///
    /// # Errors
    ///
    /// Returns [`DwijabakeError::Config`] listing every invalid or missing
    /// key.
    ///
    /// # Example
    ///
    /// ```
    /// use dwijabake::server::ServerConfig;
    /// use std::collections::BTreeMap;
    ///
    /// let mut values = BTreeMap::new();
    /// values.insert("DATABASE_URL".to_string(), "postgres://localhost/bakery".to_string());
    ///
    /// let config = ServerConfig::from_map(&values).unwrap();
    /// assert_eq!(config.api_port, 3001);
    /// assert_eq!(config.cors_origin_header(), "http://localhost:3000");
    /// ```
    pub fn from_map(values: &BTreeMap<String, String>) -> Result<Self> {
        let mut problems = Vec::new();

        let node_env = values
            .get("NODE_ENV")
            .cloned()
            .unwrap_or_else(|| DEFAULT_NODE_ENV.to_string());

        let api_port = match values.get("API_PORT").map(|v| v.trim()) {
            None => DEFAULT_API_PORT,
            Some(raw) => parse_port(raw).unwrap_or_else(|| {
                problems.push(format!("API_PORT: expected a port number, got {raw:?}"));
                DEFAULT_API_PORT
            }),
        };

        let cors_origin = parse_url("CORS_ORIGIN", values.get("CORS_ORIGIN").map_or(DEFAULT_CORS_ORIGIN, String::as_str))
            .map_err(|p| problems.push(p))
            .ok();

        let database_url = match values.get("DATABASE_URL") {
            None => {
                problems.push("DATABASE_URL: required".to_string());
                None
            }
            Some(raw) => parse_url("DATABASE_URL", raw).map_err(|p| problems.push(p)).ok(),
        };

        match (cors_origin, database_url) {
            (Some(cors_origin), Some(database_url)) if problems.is_empty() => {
                tracing::debug!(node_env = %node_env, api_port, cors_origin = %cors_origin, "configuration loaded");
                Ok(Self {
                    node_env,
                    api_port,
                    cors_origin,
                    database_url,
                })
            }
            _ => Err(DwijabakeError::Config(problems.join("; "))),
        }
    }

    /// `CORS_ORIGIN` in the form browsers send in the `Origin` header
    /// (no trailing slash).
    #[must_use]
    pub fn cors_origin_header(&self) -> String {
        self.cors_origin.origin().ascii_serialization()
    }
}

/// Accepts integral numbers, including float spellings like `"3001.0"`.
fn parse_port(raw: &str) -> Option<u16> {
    if let Ok(port) = raw.parse::<u16>() {
        return Some(port);
    }

    let number = raw.parse::<f64>().ok()?;
    let in_range = number.fract() == 0.0 && (0.0..=f64::from(u16::MAX)).contains(&number);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    in_range.then_some(number as u16)
}

fn parse_url(key: &str, raw: &str) -> std::result::Result<Url, String> {
    Url::parse(raw.trim()).map_err(|e| format!("{key}: invalid url ({e})"))
}

/// Reads a dotenv file without touching the process environment. Missing
/// files are skipped; malformed lines are logged and skipped.
fn read_env_file(path: &Path) -> BTreeMap<String, String> {
    let Ok(iter) = dotenvy::from_path_iter(path) else {
        tracing::trace!(path = %path.display(), "env file not found");
        return BTreeMap::new();
    };

    iter.filter_map(|item| {
        item.map_err(|e| tracing::warn!(path = %path.display(), error = %e, "skipping malformed env line"))
            .ok()
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[test]
    fn defaults_apply() {
        let config = ServerConfig::from_map(&map(&[("DATABASE_URL", "postgres://u:p@db:5432/bake")])).unwrap();
        assert_eq!(config.node_env, "development");
        assert_eq!(config.api_port, 3001);
        assert_eq!(config.cors_origin.as_str(), "http://localhost:3000/");
        assert_eq!(config.database_url.host_str(), Some("db"));
    }

    #[test]
    fn port_is_coerced() {
        let config = ServerConfig::from_map(&map(&[
            ("DATABASE_URL", "postgres://localhost/bake"),
            ("API_PORT", " 8080 "),
        ]))
        .unwrap();
        assert_eq!(config.api_port, 8080);
        assert_eq!(parse_port("4000.0"), Some(4000));
        assert_eq!(parse_port("70000"), None);
    }

    #[test]
    fn every_problem_is_reported() {
        let err = ServerConfig::from_map(&map(&[("API_PORT", "abc"), ("CORS_ORIGIN", "not a url")])).unwrap_err();
        let DwijabakeError::Config(message) = err else {
            panic!("expected config error, got {err:?}");
        };
        assert!(message.contains("API_PORT"));
        assert!(message.contains("CORS_ORIGIN"));
        assert!(message.contains("DATABASE_URL: required"));
    }

    #[test]
    fn env_file_is_parsed_without_mutating_env() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DWIJABAKE_TEST_ONLY_KEY=postgres://file/bake").unwrap();
        writeln!(file, "API_PORT=4100").unwrap();

        let values = read_env_file(file.path());
        assert_eq!(values.get("API_PORT").map(String::as_str), Some("4100"));
        assert!(env::var("DWIJABAKE_TEST_ONLY_KEY").is_err());
        assert!(read_env_file(Path::new("/definitely/missing/.env")).is_empty());
    }
}
