//! Greeter - command-line greeting utility
//!
//! This library provides the operations behind the `greeter` binary. All of
//! them take their inputs explicitly, so they can be driven from tests with
//! in-memory readers and writers.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Environment snapshot, `.env` loading and resolved settings
//! - `error`: Custom error types
//! - `logging`: JSON structured logging on stderr
//! - `prompt`: Line-oriented terminal prompts
//! - `greeter`: The greeting, named greeting and birth-year operations
//! - `cli`: Subcommands wiring the operations to stdin/stdout
//!
//! # Example
//!
//! ```rust,ignore
//! use greeter::config::{Environment, Settings};
//!
//! let env = Environment::load(None);
//! let settings = Settings::from_env(&env);
//! greeter::greeter::emit_greeting(&settings, &mut std::io::stdout())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod greeter;
pub mod logging;
pub mod prompt;

pub use error::{AgeError, GreeterError, GreeterResult};
