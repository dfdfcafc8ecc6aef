/*!
 * Structured Tracing
 * Subscriber setup for simulator logs using the tracing crate
 *
 * Features:
 * - RUST_LOG style filtering with a caller-chosen fallback level
 * - JSON-formatted logs for structured parsing
 * - Compact human-readable output for terminals
 */

use crate::core::limits::TRACE_JSON_ENV;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize structured tracing with an `info` fallback level
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - MLQ_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    init_tracing_with("info");
}

/// Initialize structured tracing, falling back to `default_level`
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing_with(default_level: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Check if JSON output is requested
    let use_json = std::env::var(TRACE_JSON_ENV)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json = use_json, "Structured tracing initialized");
    }
}
