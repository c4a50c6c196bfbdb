//! Milestone subcommands

use clap::{ArgAction, Args, Subcommand};

use super::args::GetArgs;

/// Milestone subcommands
#[derive(Subcommand, Debug)]
pub enum MilestoneCommands {
    /// List milestones with progress, filtering and sorting
    List(MilestoneListArgs),

    /// Get a single milestone by ID with full details
    Get(GetArgs),
}

/// Arguments for `mdp milestone list`
#[derive(Args, Debug, Clone)]
pub struct MilestoneListArgs {
    /// Comma-separated status filter
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Priority filter
    #[arg(long)]
    pub priority: Option<String>,

    /// Comma-separated labels filter (any label matches)
    #[arg(short = 'l', long)]
    pub labels: Option<String>,

    /// true for overdue only, false for not overdue
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub overdue: Option<bool>,

    /// Sort field: id, title, status, priority, created, updated, dueDate, completion
    #[arg(long, default_value = "id")]
    pub sort: String,

    /// Sort order: asc, desc
    #[arg(long, default_value = "asc")]
    pub order: String,
}
