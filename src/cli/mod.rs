//! CLI command handlers
//!
//! Bridges the clap argument parsing with the greeter operations, wiring
//! them to the real stdin/stdout and the local clock.

use std::io::{self, Write};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{GreeterError, GreeterResult};
use crate::greeter::{
    ask_birth_year, current_year, emit_greeting, greet_by_name, RandomMarkers,
};
use crate::prompt::Prompter;

/// Greeter subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GreeterCommands {
    /// Print the configured greeting (default)
    Hello,

    /// Ask for your name and greet you
    Greet {
        /// Seed for the emoji choice, for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Ask for your age and print your birth year
    Age,

    /// Show the resolved configuration as JSON
    Config,
}

/// Handle a greeter command
pub fn handle_command(settings: &Settings, cmd: GreeterCommands) -> GreeterResult<()> {
    match cmd {
        GreeterCommands::Hello => {
            let stdout = io::stdout();
            emit_greeting(settings, &mut stdout.lock())?;
        }

        GreeterCommands::Greet { seed } => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            match seed {
                Some(seed) => {
                    greet_by_name(&mut prompter, &mut RandomMarkers::seeded(seed))?;
                }
                None => {
                    greet_by_name(&mut prompter, &mut RandomMarkers::thread())?;
                }
            }
        }

        GreeterCommands::Age => {
            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            let year = current_year();
            tracing::debug!(current_year = year, "Starting birth-year prompt");
            if let Err(err) = ask_birth_year(&mut prompter, year) {
                if err.is_input_closed() {
                    tracing::warn!("Input closed before a valid age was entered");
                }
                return Err(err);
            }
        }

        GreeterCommands::Config => {
            let report = serde_json::to_string_pretty(settings).map_err(|e| {
                GreeterError::Config(format!("Failed to serialize settings: {}", e))
            })?;
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", report)?;
        }
    }

    Ok(())
}
