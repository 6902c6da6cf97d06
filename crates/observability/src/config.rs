//! Observability configuration, read from the process environment.

use core::str::FromStr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Env var holding the `EnvFilter` directives.
pub const FILTER_ENV: &str = "RUST_LOG";
/// Env var selecting the log output format.
pub const FORMAT_ENV: &str = "GILDED_ROSE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line.
    #[default]
    Json,
    /// Multi-line, human oriented.
    Pretty,
    Compact,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown log format '{0}' (expected json, pretty or compact)")]
pub struct ParseLogFormatError(String);

impl FromStr for LogFormat {
    type Err = ParseLogFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "compact" => Ok(Self::Compact),
            _ => Err(ParseLogFormatError(s.to_string())),
        }
    }
}

/// Subscriber settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub filter: String,
    pub format: LogFormat,
    /// Set when the requested format could not be parsed; reported once the
    /// subscriber is installed.
    pub format_error: Option<ParseLogFormatError>,
    /// Set when the requested filter was rejected and `info` is used instead.
    pub filter_error: Option<String>,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            format_error: None,
            filter_error: None,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `GILDED_ROSE_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var(FILTER_ENV).ok(), std::env::var(FORMAT_ENV).ok())
    }

    /// Build from raw variable values. Missing, blank or unparsable values
    /// use defaults; parse failures are kept for reporting.
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let (filter, filter_error) = match filter.filter(|f| !f.trim().is_empty()) {
            None => (DEFAULT_FILTER.to_string(), None),
            Some(raw) => match EnvFilter::try_new(&raw) {
                Ok(_) => (raw, None),
                Err(e) => (
                    DEFAULT_FILTER.to_string(),
                    Some(format!("invalid log filter '{raw}': {e}")),
                ),
            },
        };

        let (format, format_error) = match format.as_deref().map(str::trim) {
            None | Some("") => (LogFormat::default(), None),
            Some(raw) => match raw.parse() {
                Ok(format) => (format, None),
                Err(e) => (LogFormat::default(), Some(e)),
            },
        };

        Self {
            filter,
            format,
            format_error,
            filter_error,
        }
    }
}
