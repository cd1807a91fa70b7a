//! Tracing/logging initialization.
//!
//! Configured from the environment:
//! - `RUST_LOG`: filter directives (default `info`)
//! - `MDB_LOG_FORMAT`: `json` (default) or `pretty`

use tracing_subscriber::EnvFilter;

pub const LOG_FORMAT_ENV: &str = "MDB_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

impl LogFormat {
    /// Unknown values fall back to JSON.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => LogFormat::Pretty,
            _ => LogFormat::Json,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info,mdb_geo=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl TracingConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var(EnvFilter::DEFAULT_ENV).ok(),
            std::env::var(LOG_FORMAT_ENV).ok(),
        )
    }

    fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        Self {
            filter: filter
                .filter(|f| !f.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(config: &TracingConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    // JSON logs + timestamps by default.
    let _ = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
    };
}
