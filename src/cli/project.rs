//! Project subcommands

use clap::Subcommand;

use super::args::ContentArgs;

/// Project subcommands
#[derive(Subcommand, Debug)]
pub enum ProjectCommands {
    /// Get project identity, health, and log
    Get(ContentArgs),
}
