//! Entry point for the `generate-subcommand` CLI.
//!
//! Parses flags, runs the generate flow against the terminal, and maps
//! errors to exit codes.

use generate_subcommand::cli::Cli;
use generate_subcommand::config::Config;
use generate_subcommand::exit_codes;
use generate_subcommand::generate::{self, Outcome};
use generate_subcommand::logging;
use std::io;
use std::process::ExitCode;
use tracing::{debug, error};

fn main() -> ExitCode {
    let config = Config::from_cli(Cli::parse_args());
    logging::init_with_filter(&config.log_filter);

    let stdin = io::stdin();
    let stdout = io::stdout();

    match generate::run(&config, stdin.lock(), stdout.lock()) {
        Ok(Outcome::Written(path)) => {
            debug!(path = %path.display(), "done");
            ExitCode::from(exit_codes::SUCCESS as u8)
        }
        Ok(Outcome::Declined) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            error!(error = %err, "generation failed");
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
