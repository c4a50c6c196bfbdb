//! Command dispatch logic for mdp

use std::time::Instant;

use crate::cli::Cli;
use mdp_core::error::Result;
use tracing::debug;

mod command;
mod commands;

use command::{Command, CommandContext};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);
    debug!(elapsed = ?start.elapsed(), "dispatch");
    cli.command.execute(&ctx)
}
