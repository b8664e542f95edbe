//! Resolved settings for the greeter
//!
//! Turns an [`Environment`] snapshot into the values the commands consume:
//! the greeting message (and where it came from) and the log severity.

use serde::Serialize;

use super::env::Environment;
use crate::logging::Severity;

/// Variable holding the greeting message
pub const GREETING_MESSAGE_VAR: &str = "GREETING_MESSAGE";

/// Variable holding the log severity threshold
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Greeting printed when no override is configured
pub const DEFAULT_GREETING: &str = "Hello, World!";

/// Where the greeting message was resolved from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GreetingSource {
    /// Built-in default
    Default,
    /// `GREETING_MESSAGE` from the process environment or `.env` file
    Environment,
}

impl GreetingSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Environment => "environment",
        }
    }
}

/// Settings resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Message printed by `hello`
    pub greeting_message: String,

    /// Whether the message is the default or an override
    pub greeting_source: GreetingSource,

    /// Threshold for the structured log stream
    pub log_level: Severity,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            greeting_message: DEFAULT_GREETING.to_string(),
            greeting_source: GreetingSource::Default,
            log_level: Severity::default(),
        }
    }
}

impl Settings {
    /// Resolve settings from an environment snapshot
    pub fn from_env(env: &Environment) -> Self {
        let (greeting_message, greeting_source) =
            match env.get_non_empty(GREETING_MESSAGE_VAR) {
                Some(message) => (message.to_string(), GreetingSource::Environment),
                None => (DEFAULT_GREETING.to_string(), GreetingSource::Default),
            };

        let log_level = env
            .get(LOG_LEVEL_VAR)
            .map(Severity::parse_or_default)
            .unwrap_or_default();

        Self {
            greeting_message,
            greeting_source,
            log_level,
        }
    }

    /// Check if the greeting is the built-in default
    pub fn is_default_greeting(&self) -> bool {
        self.greeting_source == GreetingSource::Default
    }
}
