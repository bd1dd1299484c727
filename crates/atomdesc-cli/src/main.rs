mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod utils;

use crate::cli::Cli;
use clap::Parser;
use clap::error::ErrorKind;
use std::error::Error;
use std::process::ExitCode;
use tracing::{debug, error, info};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let _ = e.print();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.as_deref()) {
        eprintln!("Error: {}", report(&e));
        return ExitCode::FAILURE;
    }

    info!("atomdesc v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    match commands::calculate::run(&cli) {
        Ok(()) => {
            info!("Command completed successfully.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            let message = report(&e);
            error!("Command failed: {}", message);
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

/// Joins an error and its sources into a single line.
fn report(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
