//! Roadpath - road-network pathfinding visualizer
//!
//! Runs breadth-first, depth-first or uniform-cost search between two
//! cities and prints, replays or renders the result.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use roadpath_core::error::{ExitCode as RoadpathExitCode, RoadpathError};
use roadpath_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return argument_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit(RoadpathExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit(e.exit_code())
        }
    }
}

fn exit(code: RoadpathExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

/// Print a command failure in the requested format
fn report(cli: &Cli, error: &RoadpathError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if !cli.quiet => eprintln!("error: {}", error),
        OutputFormat::Human => {}
    }
}

/// Handle a clap failure.
///
/// `Cli.format` is not available yet, so `--format json` is looked up in
/// the raw arguments to decide between clap's own output and the JSON
/// envelope. Help and version always go through clap.
fn argument_failure(err: clap::Error) -> ExitCode {
    if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
        || !argv_requests_json(env::args().skip(1))
    {
        err.exit();
    }

    let error = match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => RoadpathError::UsageError(err.to_string()),
        _ => RoadpathError::Other(err.to_string()),
    };
    eprintln!("{}", error.to_json());
    exit(error.exit_code())
}

fn argv_requests_json(mut args: impl Iterator<Item = String>) -> bool {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--format=json" => return true,
            "--format" if args.next().as_deref() == Some("json") => return true,
            _ => {}
        }
    }
    false
}
