//! HTTP client for the probe service.

use std::time::Duration;

use tracing::instrument;
use url::Url;

use crate::domain::error::{DwijabakeError, Result};
use crate::domain::{DbCheckResponse, HealthResponse};

/// Environment variable naming the probe service base URL.
pub const API_URL_VAR: &str = "NEXT_PUBLIC_API_URL";

/// Base URL used when [`API_URL_VAR`] is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`DwijabakeError::Config`] if `base_url` is not a valid URL.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base_url = Url::parse(base_url.trim())
            .map_err(|e| DwijabakeError::Config(format!("invalid api url {base_url:?}: {e}")))?;

        // Keep a path prefix like `/api` when joining endpoints.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Ok(Self { base_url, http })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| DwijabakeError::Config(format!("invalid endpoint {path}: {e}")))
    }

    /// `GET /health`.
    ///
    /// # Errors
    ///
    /// Returns [`DwijabakeError::Http`] on transport failure or an
    /// unparseable body.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub async fn try_health(&self) -> Result<HealthResponse> {
        let url = self.endpoint("health")?;
        Ok(self.http.get(url).send().await?.json().await?)
    }

    /// `GET /db`.
    ///
    /// # Errors
    ///
    /// Returns [`DwijabakeError::Http`] on transport failure or an
    /// unparseable body.
    #[instrument(skip(self), fields(base = %self.base_url))]
    pub async fn try_db_check(&self) -> Result<DbCheckResponse> {
        let url = self.endpoint("db")?;
        Ok(self.http.get(url).send().await?.json().await?)
    }

    /// Health check where any failure reads as `{"status":"error"}`.
    pub async fn health(&self) -> HealthResponse {
        self.try_health().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "health check failed");
            HealthResponse::error()
        })
    }

    /// Database check where any failure reads as `{"ok":false,"error":..}`.
    pub async fn db_check(&self) -> DbCheckResponse {
        self.try_db_check().await.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "db check failed");
            DbCheckResponse::failed(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_join_onto_base() {
        let client = ApiClient::new("http://localhost:3001").unwrap();
        assert_eq!(client.endpoint("db").unwrap().as_str(), "http://localhost:3001/db");

        let prefixed = ApiClient::new("https://bake.example/api").unwrap();
        assert_eq!(prefixed.endpoint("health").unwrap().as_str(), "https://bake.example/api/health");
    }

    #[test]
    fn rejects_bad_base_url() {
        assert!(matches!(ApiClient::new("localhost"), Err(DwijabakeError::Config(_))));
    }

    #[tokio::test]
    async fn unreachable_service_maps_to_error_payloads() {
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        assert_eq!(client.health().await, HealthResponse::error());

        let db = client.db_check().await;
        assert!(!db.ok);
        assert!(db.error.is_some());
    }
}
