//! Logging and optional OpenTelemetry trace export.
//!
//! # Architecture
//!
//! ```text
//! tracing macros ─┬─ EnvFilter → fmt layer → stderr
//!                 └─ tracing-opentelemetry → SDK → FileSpanExporter → OTLP JSON lines
//! ```
//!
//! # Configuration
//!
//! The filter is taken from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`
//!
//! Span export is enabled by `trace_file`. The file rotates at 10 MB and the
//! newest three rotated copies are kept.
//!
//! # Modules
//!
//! - [`init`]: subscriber setup
//! - [`export`]: file span exporter and OTLP JSON encoding

pub mod export;
pub mod init;

pub use init::init_tracing;
