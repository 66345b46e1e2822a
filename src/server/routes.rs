use std::sync::Arc;

use axum::{Json, extract::State as AxumState};
use chrono::SecondsFormat;
use tracing::debug;

use super::state::State;
use crate::domain::{DbCheckResponse, HealthResponse};

/// `GET /health`: liveness only, never touches the database.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// `GET /db`: runs the probe and reports the database time, or the driver
/// error. Always answers 200.
pub async fn db_handler(AxumState(state): AxumState<Arc<State>>) -> Json<DbCheckResponse> {
    let response = match state.probe.now().await {
        Ok(time) => DbCheckResponse::reachable(time.to_rfc3339_opts(SecondsFormat::Millis, true)),
        Err(error) => DbCheckResponse::failed(error),
    };

    debug!(ok = response.ok, "db check answered");
    Json(response)
}
