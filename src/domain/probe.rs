//! Payloads shared between the probe service and its clients.
//!
//! These mirror the JSON bodies of `GET /health` and `GET /db`. Optional
//! fields are omitted from the wire form when absent.

use serde::{Deserialize, Serialize};

/// Application name shared by the server banner and the status page.
pub const APP_NAME: &str = "dwijabake";

/// Liveness status reported by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
}

impl HealthResponse {
    #[must_use]
    pub const fn ok() -> Self {
        Self { status: HealthStatus::Ok }
    }

    #[must_use]
    pub const fn error() -> Self {
        Self { status: HealthStatus::Error }
    }
}

/// Result of `GET /db`.
///
/// Either `{ "ok": true, "time": "<ISO-8601>" }` or
/// `{ "ok": false, "error": "<message>" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DbCheckResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl DbCheckResponse {
    pub fn reachable(time: impl Into<String>) -> Self {
        Self {
            ok: true,
            time: Some(time.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            time: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_payload_omits_time() {
        let json = serde_json::to_value(DbCheckResponse::failed("connection refused")).unwrap();
        assert_eq!(json, serde_json::json!({ "ok": false, "error": "connection refused" }));
    }

    #[test]
    fn health_status_is_lowercase() {
        let json = serde_json::to_string(&HealthResponse::ok()).unwrap();
        assert_eq!(json, r#"{"status":"ok"}"#);
    }
}
