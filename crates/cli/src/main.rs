//! strata - print layered YAML configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load base, environment and override layers via `strata-config`.
//! - Print the merged configuration or a single value.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout only carries rendered configuration.

mod args;
mod commands;
mod error;

use args::{Cli, Commands};
use clap::Parser;
use error::{ExitCode, ExitCodeExt};
use std::io::Write;
use strata_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new(".").load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let loader = cli.load.loader();
    tracing::debug!(
        dir = %loader.base_path().display(),
        environment = loader.environment().unwrap_or("-"),
        prefix = loader.env_prefix().unwrap_or("-"),
        "Loading configuration"
    );

    let result = match &cli.command {
        Commands::Show { format } => commands::show(&loader, *format),
        Commands::Get { path, format } => commands::get(&loader, path, *format),
    };

    match result {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(output.as_bytes()) {
                eprintln!("Failed to write output: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(e.exit_code().as_i32());
        }
    }
}
