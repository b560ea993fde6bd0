//! Tracing/logging setup shared by binaries and tests.

/// Logging configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&ObservabilityConfig::from_env());
}
