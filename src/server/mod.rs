//! Backend probe service.
//!
//! A small axum server exposing `GET /health` and `GET /db` for the
//! storefront's status page. It is configured from the environment and
//! dotenv files, allows one CORS origin with credentials, and shuts down
//! gracefully on Ctrl+C or SIGTERM.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
    routing::get,
};
use signal::{
    ctrl_c,
    unix::{SignalKind, signal},
};
use tokio::{net::TcpListener, signal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub mod config;
pub mod error;
pub mod probe;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use probe::{DatabaseProbe, PostgresProbe};
pub use state::State;

use crate::domain::error::{DwijabakeError, Result};
use routes::{db_handler, health_handler};

/// Builds the route table with CORS and request tracing.
///
/// # Errors
///
/// Returns [`DwijabakeError::Config`] if the CORS origin cannot be used as a
/// header value.
pub fn router(state: Arc<State>) -> Result<Router> {
    let origin = HeaderValue::from_str(&state.config.cors_origin_header())
        .map_err(|e| DwijabakeError::Config(format!("CORS_ORIGIN: {e}")))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    Ok(Router::new()
        .route("/health", get(health_handler))
        .route("/db", get(db_handler))
        .fallback(error::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

/// Serves until a shutdown signal arrives.
///
/// # Errors
///
/// Returns [`DwijabakeError::Server`] if the port cannot be bound or the
/// server fails.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    info!(node_env = %config.node_env, "Initializing state...");
    let state = State::new(config);
    let port = state.config.api_port;
    let app = router(state)?;

    let address = format!("0.0.0.0:{port}");
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| DwijabakeError::Server(format!("failed to bind {address}: {e}")))?;
    info!("API listening on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| DwijabakeError::Server(e.to_string()))?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
