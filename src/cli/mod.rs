//! CLI argument parsing for mdp
//!
//! Global flags: --project-path, --format, --quiet, --verbose, --log-level, --log-json

pub mod args;
pub mod issue;
pub mod milestone;
pub mod project;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{ContentArgs, GetArgs, SearchArgs};
pub use issue::{IssueCommands, IssueListArgs};
pub use milestone::{MilestoneCommands, MilestoneListArgs};
pub use project::ProjectCommands;
use mdp_core::format::OutputFormat;

/// File-based project management CLI using markdown
#[derive(Parser, Debug)]
#[command(name = "mdp")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true, arg_required_else_help = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long, action = clap::ArgAction::Version)]
    version: (),

    /// Path to project root (defaults to searching upward from the current directory)
    #[arg(short = 'p', long, global = true, env = "MDP_PROJECT_PATH")]
    pub project_path: Option<PathBuf>,

    /// Output format: json, table
    #[arg(short = 'f', long, global = true)]
    pub format: Option<OutputFormat>,

    /// Suppress all output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Enable debug logging to stderr
    #[arg(short = 'V', long, global = true)]
    pub verbose: bool,

    /// Log filter level or directive (e.g. `debug`, `mdp_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search project, issues, and milestones by text content
    Search(SearchArgs),

    /// Read issues
    #[command(subcommand)]
    Issue(IssueCommands),

    /// Read milestones and their progress
    #[command(subcommand)]
    Milestone(MilestoneCommands),

    /// Read the project record
    #[command(subcommand)]
    Project(ProjectCommands),
}
