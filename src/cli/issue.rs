//! Issue subcommands

use clap::{ArgAction, Args, Subcommand};

use super::args::GetArgs;

/// Issue subcommands
#[derive(Subcommand, Debug)]
pub enum IssueCommands {
    /// List issues with filtering and sorting
    List(IssueListArgs),

    /// Get a single issue by ID with full details
    Get(GetArgs),
}

/// Arguments for `mdp issue list`
#[derive(Args, Debug, Clone)]
pub struct IssueListArgs {
    /// Comma-separated status filter
    #[arg(short = 's', long)]
    pub status: Option<String>,

    /// Comma-separated type filter
    #[arg(long = "type")]
    pub issue_type: Option<String>,

    /// Priority filter
    #[arg(long)]
    pub priority: Option<String>,

    /// Comma-separated labels filter (any label matches)
    #[arg(short = 'l', long)]
    pub labels: Option<String>,

    /// Filter by assignee (use 'none' for unassigned)
    #[arg(short = 'a', long)]
    pub assignee: Option<String>,

    /// Filter by milestone ID (use 'none' for unassigned)
    #[arg(short = 'm', long)]
    pub milestone: Option<String>,

    /// true for blocked only, false for unblocked only
    #[arg(long, action = ArgAction::Set, value_name = "BOOL")]
    pub blocked: Option<bool>,

    /// Filter by parent issue ID (use 'none' for top-level)
    #[arg(long)]
    pub parent: Option<String>,

    /// Sort field: id, title, status, priority, type, created, updated, estimate, spent, dueDate
    #[arg(long, default_value = "id")]
    pub sort: String,

    /// Sort order: asc, desc
    #[arg(long, default_value = "asc")]
    pub order: String,

    /// Only issues created on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub created_after: Option<String>,

    /// Only issues created on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub created_before: Option<String>,

    /// Only issues due on or after this date (YYYY-MM-DD)
    #[arg(long)]
    pub due_after: Option<String>,

    /// Only issues due on or before this date (YYYY-MM-DD)
    #[arg(long)]
    pub due_before: Option<String>,
}
