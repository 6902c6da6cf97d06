//! Tracing/logging setup shared by tests and embedding binaries.

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Environment-driven settings for the subscriber.
pub mod config;

/// Tracing configuration (filters, formats).
pub mod tracing;

pub use config::{LogFormat, ObservabilityConfig, ParseLogFormatError};
