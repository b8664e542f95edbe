use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use greeter::cli::{handle_command, GreeterCommands};
use greeter::config::{Environment, Settings};

#[derive(Parser)]
#[command(
    name = "greeter",
    version,
    about = "Command-line greeting utility",
    long_about = "Prints a greeting configured through GREETING_MESSAGE (or a .env \
                  file), greets you by name, or works out the year you were born. \
                  Structured JSON logs go to stderr, filtered by LOG_LEVEL."
)]
struct Cli {
    /// Path to the .env file (default: search for .env upward from the working directory)
    #[arg(long, global = true, env = "GREETER_ENV_FILE")]
    env_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<GreeterCommands>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve configuration once, then hand it to the command
    let env = Environment::load(cli.env_file.as_deref());
    let settings = Settings::from_env(&env);

    greeter::logging::init(settings.log_level);

    for warning in env.dotenv_warnings() {
        tracing::warn!(error = %warning, "Skipped unparseable .env entry");
    }

    handle_command(&settings, cli.command.unwrap_or(GreeterCommands::Hello))?;

    Ok(())
}
