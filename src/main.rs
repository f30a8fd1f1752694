//! Entry point for the `welcomegen` CLI.
//!
//! Parses arguments, runs the generator, and maps errors to exit codes.

use std::process::ExitCode;
use welcomegen::cli::Cli;
use welcomegen::{commands, exit_codes, logging};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::run(&cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
