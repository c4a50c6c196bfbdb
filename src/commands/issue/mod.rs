//! `mdp issue` commands - read issues
//!
//! - `issue list` filters, sorts and lists issues without their body or log
//! - `issue get --id` shows one issue with its computed relations

pub mod format;

use std::time::Instant;

use tracing::debug;

use crate::cli::args::parse_comma_separated;
use crate::cli::{Cli, IssueListArgs};
use mdp_core::entity::computed::EnrichedIssue;
use mdp_core::entity::Issue;
use mdp_core::error::{MdpError, Result};
use mdp_core::format::OutputFormat;
use mdp_core::query::{sort_with, validate_date, IssueFilter, IssueSortField, SortOrder};
use mdp_core::store::Store;
use mdp_core::trace_time;

/// A validated `issue list` invocation
#[derive(Debug, Clone)]
pub struct IssueListRequest {
    pub filter: IssueFilter,
    pub sort: IssueSortField,
    pub order: SortOrder,
}

impl IssueListRequest {
    pub fn from_args(args: &IssueListArgs) -> Result<Self> {
        let date = |value: &Option<String>| value.as_deref().map(validate_date).transpose();

        let filter = IssueFilter::new()
            .with_statuses(parse_comma_separated(args.status.as_deref()))
            .with_types(parse_comma_separated(args.issue_type.as_deref()))
            .with_priority(args.priority.clone())
            .with_labels(parse_comma_separated(args.labels.as_deref()))
            .with_assignee(args.assignee.clone())
            .with_milestone(args.milestone.clone())
            .with_blocked(args.blocked)
            .with_parent(args.parent.clone())
            .with_created(date(&args.created_after)?, date(&args.created_before)?)
            .with_due(date(&args.due_after)?, date(&args.due_before)?);

        Ok(IssueListRequest {
            filter,
            sort: args.sort.parse()?,
            order: args.order.parse()?,
        })
    }
}

/// Find an issue by id, ignoring case
pub fn find_issue<'a>(issues: &'a [Issue], id: &str) -> Option<&'a Issue> {
    issues.iter().find(|issue| issue.id.eq_ignore_ascii_case(id))
}

/// Execute `issue list`
pub fn list(
    cli: &Cli,
    store: &Store,
    request: &IssueListRequest,
    format: OutputFormat,
    start: Instant,
) -> Result<()> {
    debug!(
        filter = ?request.filter,
        sort = ?request.sort,
        order = %request.order,
        "issue_list_params"
    );

    let issues = store.read_issues();
    let mut entries: Vec<EnrichedIssue> = issues
        .iter()
        .filter(|issue| request.filter.matches(issue))
        .map(|issue| EnrichedIssue::new(issue, &issues))
        .collect();
    sort_with(&mut entries, request.order, |a, b| {
        request.sort.compare(a.issue, b.issue)
    });
    trace_time!(start, "issue_list", total = issues.len(), shown = entries.len());

    if cli.quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Json => format::output_list_json(&entries),
        OutputFormat::Table => {
            println!("{}", format::render_list_table(&entries));
            Ok(())
        }
    }
}

/// Execute `issue get`
pub fn get(
    cli: &Cli,
    store: &Store,
    id: &str,
    include_content: bool,
    format: OutputFormat,
) -> Result<()> {
    debug!(id, include_content, "issue_get");

    let issues = store.read_issues();
    let issue = find_issue(&issues, id).ok_or_else(|| MdpError::IssueNotFound {
        id: id.to_string(),
        project_path: store.root().to_path_buf(),
    })?;
    let entry = EnrichedIssue::new(issue, &issues);

    if cli.quiet {
        return Ok(());
    }

    match format {
        OutputFormat::Json => format::output_get_json(&entry, include_content),
        OutputFormat::Table => {
            println!("{}", format::render_details_table(&entry, include_content));
            Ok(())
        }
    }
}
