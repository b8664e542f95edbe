//! Configured greeting emitter

use std::io::Write;

use crate::config::Settings;
use crate::error::GreeterResult;

/// Print the resolved greeting followed by a newline
///
/// Diagnostic events go through `tracing`; with no subscriber installed they
/// are dropped, and they never reach `out`.
pub fn emit_greeting<W: Write>(settings: &Settings, out: &mut W) -> GreeterResult<()> {
    tracing::info!("Loading environment configuration");

    if settings.is_default_greeting() {
        tracing::info!(
            greeting_message = %settings.greeting_message,
            source = settings.greeting_source.as_str(),
            "Using default greeting message"
        );
    } else {
        tracing::info!(
            greeting_message = %settings.greeting_message,
            source = settings.greeting_source.as_str(),
            "Environment variable loaded successfully"
        );
    }

    writeln!(out, "{}", settings.greeting_message)?;
    Ok(())
}
