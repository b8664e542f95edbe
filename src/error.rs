//! Custom error types for the greeter
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for greeter operations
#[derive(Error, Debug)]
pub enum GreeterError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Standard input ended before a prompt could be answered
    #[error("Input closed while waiting for {0}")]
    InputClosed(&'static str),
}

impl GreeterError {
    /// Check if this error signals end of input
    pub fn is_input_closed(&self) -> bool {
        matches!(self, Self::InputClosed(_))
    }
}

impl From<std::io::Error> for GreeterError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Rejected answers to the age prompt
///
/// The display text is what the user sees before being asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    /// Input is not an integer
    #[error("Please enter a valid number.")]
    Parse,

    /// Input is an integer below zero
    #[error("Please enter a valid age (cannot be negative).")]
    Negative,
}

/// Result type alias for greeter operations
pub type GreeterResult<T> = Result<T, GreeterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GreeterError::Config("bad line".into());
        assert_eq!(err.to_string(), "Configuration error: bad line");
    }

    #[test]
    fn test_input_closed() {
        let err = GreeterError::InputClosed("an age");
        assert_eq!(err.to_string(), "Input closed while waiting for an age");
        assert!(err.is_input_closed());
    }

    #[test]
    fn test_age_error_messages() {
        assert_eq!(AgeError::Parse.to_string(), "Please enter a valid number.");
        assert_eq!(
            AgeError::Negative.to_string(),
            "Please enter a valid age (cannot be negative)."
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: GreeterError = io_err.into();
        assert!(matches!(err, GreeterError::Io(_)));
    }
}
