//! Structured logging for the greeter
//!
//! Events are emitted with `tracing` macros and rendered as one JSON object
//! per line on stderr, so stdout stays reserved for the greeting itself.
//! The severity threshold comes from `LOG_LEVEL`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

use crate::error::GreeterError;

/// Ordered log severities accepted in `LOG_LEVEL`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    /// Parse a level name, falling back to INFO when unrecognized
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Filter passed to the subscriber
    ///
    /// tracing has no level above ERROR, so CRITICAL shares its filter.
    pub fn level_filter(&self) -> LevelFilter {
        match self {
            Self::Debug => LevelFilter::DEBUG,
            Self::Info => LevelFilter::INFO,
            Self::Warning => LevelFilter::WARN,
            Self::Error | Self::Critical => LevelFilter::ERROR,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = GreeterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" => Ok(Self::Warning),
            "ERROR" => Ok(Self::Error),
            "CRITICAL" => Ok(Self::Critical),
            other => Err(GreeterError::Config(format!("Unknown log level: {}", other))),
        }
    }
}

/// Build the JSON subscriber writing to `writer`
pub fn json_subscriber<W>(
    level: Severity,
    writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .with_max_level(level.level_filter())
        .with_current_span(false)
        .with_span_list(false)
        .with_writer(writer)
        .finish()
}

/// Install the stderr JSON subscriber as the global default
///
/// Returns false if a subscriber was already installed. Logging setup never
/// aborts the command that follows it.
pub fn init(level: Severity) -> bool {
    let subscriber = json_subscriber(level, std::io::stderr);
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
