//! Tracing/logging initialization.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ObservabilityConfig};

/// Initialize tracing/logging for the process from the environment.
///
/// Safe to call multiple times (subsequent calls are no-ops). A bad
/// `RUST_LOG` falls back to `info` and is reported through the new subscriber.
pub fn init() {
    if let Err(e) = init_with(ObservabilityConfig::from_env()) {
        // Only an already-installed subscriber is expected here.
        if !::tracing::dispatcher::has_been_set() {
            eprintln!("failed to initialize logging: {e:#}");
        }
    }
}

/// Install a global fmt subscriber for `config`.
///
/// Fails if the filter directives are invalid or a global subscriber is
/// already installed.
pub fn init_with(config: ObservabilityConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.filter)
        .with_context(|| format!("invalid log filter '{}'", config.filter))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    if let Some(err) = config.filter_error {
        ::tracing::warn!(error = %err, "falling back to info log filter");
    }
    if let Some(err) = config.format_error {
        ::tracing::warn!(error = %err, "falling back to json log format");
    }
    Ok(())
}
