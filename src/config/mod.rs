//! Configuration module for the greeter
//!
//! This module provides configuration management including:
//! - Environment snapshots merged with an optional `.env` file
//! - Resolved settings passed into each command

pub mod env;
pub mod settings;

pub use env::Environment;
pub use settings::{GreetingSource, Settings};
