//! Tracing subscriber setup.

use super::export;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber.
///
/// The filter comes from `RUST_LOG` when set, otherwise from
/// `config.trace_level` (default `"info"`). Human-readable events go to
/// stderr. When `config.trace_file` is set, spans are also exported there as
/// OTLP JSON.
///
/// Calling this more than once is harmless: only the first call installs a
/// subscriber.
///
/// ```rust
/// use dwijabake::observability::init_tracing;
/// use dwijabake::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let otel_layer = config.trace_file.as_ref().and_then(|path| {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("trace export disabled: cannot create {}: {e}", dir.display());
                return None;
            }
        }

        let resource = Resource::new(vec![
            KeyValue::new("service.name", export::SCOPE_NAME),
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
        ]);
        let provider = export::file_tracer_provider(path.clone(), resource);
        Some(OpenTelemetryLayer::new(provider.tracer(export::SCOPE_NAME)))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .with(otel_layer)
        .try_init();
}
