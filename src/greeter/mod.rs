//! Greeter operations
//!
//! Each operation takes its inputs explicitly (settings, reader/writer,
//! marker source, current year) and shares no state with the others.
//!
//! - `message`: prints the configured greeting
//! - `named`: asks for a name and prints a decorated greeting
//! - `birth_year`: asks for an age until valid and prints the birth year

pub mod birth_year;
pub mod message;
pub mod named;

pub use birth_year::{ask_birth_year, current_year, parse_age};
pub use message::emit_greeting;
pub use named::{greet_by_name, MarkerSource, RandomMarkers, MARKERS};
