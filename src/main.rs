//! mdp - file-based project management using markdown
//!
//! Issues, milestones and the project record live as markdown files with
//! YAML front matter under `.mdp/`; `mdp search` ranks them with BM25.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::Cli;
use mdp_core::error::{ExitCode as MdpExitCode, MdpError};
use mdp_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let mdp_error = match err.kind() {
                // Help and version are informational, not errors - let clap handle them
                clap::error::ErrorKind::DisplayHelp
                | clap::error::ErrorKind::DisplayVersion
                | clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => err.exit(),
                _ if argv_requests_table() => err.exit(),
                _ => MdpError::UsageError(err.to_string().trim_end().to_string()),
            };

            if !argv_requests_quiet() {
                print_error(&mdp_error);
            }
            return ExitCode::from(mdp_error.exit_code() as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(MdpExitCode::Success as u8),
        Err(e) => {
            tracing::debug!(code = e.code(), error = %e, "command failed");
            if !cli.quiet {
                print_error(&e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// Errors are always reported as a JSON envelope on stderr
fn print_error(err: &MdpError) {
    match serde_json::to_string_pretty(&err.to_json()) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("error: {}", err),
    }
}

fn argv_requests_table() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" || arg == "-f" {
            if args.next().is_some_and(|v| v == "table") {
                return true;
            }
        } else if arg == "--format=table" {
            return true;
        }
    }
    false
}

fn argv_requests_quiet() -> bool {
    env::args().skip(1).any(|arg| arg == "--quiet" || arg == "-q")
}
