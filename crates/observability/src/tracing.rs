//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{DEFAULT_FILTER, LogFormat, ObservabilityConfig};

/// Install the global subscriber described by `config`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &ObservabilityConfig) {
    let filter = config
        .filter
        .as_deref()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
