//! Tracing/logging setup shared by every binary and test harness.

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&tracing::TracingConfig::from_env());
}

/// Initialize process-wide tracing with an explicit configuration.
pub fn init_with(config: &tracing::TracingConfig) {
    tracing::init(config);
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, TracingConfig};
