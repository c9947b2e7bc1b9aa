//! Logging setup
//!
//! Structured logging goes through `tracing`. Events are written to stderr so
//! a diagram printed on stdout can be piped without noise.
//!
//! Level resolution order: explicit argument, `TYPECHART_LOG_LEVEL`,
//! `RUST_LOG`, then `warn`. Formats: `compact` (default), `pretty`, `json`.
//!
//! ```bash
//! # Trace catalog loading only
//! RUST_LOG="typechart::catalog=trace" typechart generate src --namespace com.zoo
//! ```

use crate::error::{Error, Result};
use std::str::FromStr;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Initialize the global tracing subscriber.
///
/// Fails if the format is unknown or a subscriber is already installed.
pub fn init_logging(level: Option<&str>, format: Option<&str>) -> Result<()> {
    let log_level = level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TYPECHART_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "warn".to_string());

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let format = LogFormat::from_str(format.unwrap_or("compact")).map_err(Error::Other)?;

    let installed = match format {
        LogFormat::Compact => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_level(true)
                    .with_span_events(FmtSpan::NONE),
            )
            .try_init(),
        LogFormat::Pretty => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(
                fmt::Layer::default()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .json(),
            )
            .try_init(),
    };

    installed.map_err(|e| Error::other(format!("Failed to initialize logging: {}", e)))
}
