//! Hackjudge - hackathon judging CLI
//!
//! Assigns judge panels to project tables and turns raw judge scores into
//! overall, per-track and flagged-project reports.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::{Cli, OutputFormat};
use hackjudge_core::error::{ExitCode as HackExitCode, HackError};
use hackjudge_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if argv_requests_json() && !is_display(&err) => {
            let error = usage_error(err);
            eprintln!("{}", error.to_json());
            return ExitCode::from(error.exit_code() as u8);
        }
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {e}");
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(HackExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn is_display(err: &clap::Error) -> bool {
    matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion)
}

/// Map a parse failure onto the error envelope printed for `--format json`
fn usage_error(err: clap::Error) -> HackError {
    match err.kind() {
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => HackError::UsageError(err.to_string()),
        _ => HackError::Other(err.to_string()),
    }
}

/// Whether argv asks for JSON, for parses that fail before `Cli.format` exists
fn argv_requests_json() -> bool {
    let mut format = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            format = args.next();
        } else if let Some(value) = arg.strip_prefix("--format=") {
            format = Some(value.to_string());
        }
    }
    format.is_some_and(|v| v.parse::<OutputFormat>().ok() == Some(OutputFormat::Json))
}
