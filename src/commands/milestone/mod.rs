//! `mdp milestone` commands - read milestones with their progress
//!
//! Progress is measured over the issues whose `milestone` names the milestone.
//! An issue is complete when its status is one of the project's completed
//! issue statuses.

pub mod format;

use std::time::Instant;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::cli::args::parse_comma_separated;
use crate::cli::{Cli, MilestoneListArgs};
use mdp_core::entity::computed::EnrichedMilestone;
use mdp_core::entity::{Issue, Milestone};
use mdp_core::error::{MdpError, Result};
use mdp_core::format::OutputFormat;
use mdp_core::query::{sort_with, MilestoneFilter, MilestoneSortField, SortOrder};
use mdp_core::store::Store;
use mdp_core::trace_time;

/// A validated `milestone list` invocation
#[derive(Debug, Clone)]
pub struct MilestoneListRequest {
    pub filter: MilestoneFilter,
    pub sort: MilestoneSortField,
    pub order: SortOrder,
}

impl MilestoneListRequest {
    pub fn from_args(args: &MilestoneListArgs) -> Result<Self> {
        let filter = MilestoneFilter::new()
            .with_statuses(parse_comma_separated(args.status.as_deref()))
            .with_priority(args.priority.clone())
            .with_labels(parse_comma_separated(args.labels.as_deref()))
            .with_overdue(args.overdue);

        Ok(MilestoneListRequest {
            filter,
            sort: args.sort.parse()?,
            order: args.order.parse()?,
        })
    }
}

/// Today's date in UTC, used for the overdue check
fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn enrich<'a>(
    store: &Store,
    milestones: &'a [Milestone],
    issues: &[Issue],
) -> Vec<EnrichedMilestone<'a>> {
    let done = store.config().done_issue_statuses();
    let today = today();
    milestones
        .iter()
        .map(|m| EnrichedMilestone::new(m, issues, &done, today))
        .collect()
}

/// Execute `milestone list`
pub fn list(
    cli: &Cli,
    store: &Store,
    request: &MilestoneListRequest,
    format: OutputFormat,
    start: Instant,
) -> Result<()> {
    debug!(
        filter = ?request.filter,
        sort = ?request.sort,
        order = %request.order,
        "milestone_list_params"
    );

    let milestones = store.read_milestones();
    let issues = store.read_issues();
    let mut entries: Vec<EnrichedMilestone> = enrich(store, &milestones, &issues)
        .into_iter()
        .filter(|entry| request.filter.matches(entry))
        .collect();
    sort_with(&mut entries, request.order, |a, b| request.sort.compare(a, b));
    trace_time!(
        start,
        "milestone_list",
        total = milestones.len(),
        shown = entries.len()
    );

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

/// Execute `milestone get`
pub fn get(
    cli: &Cli,
    store: &Store,
    id: &str,
    include_content: bool,
    format: OutputFormat,
) -> Result<()> {
    debug!(id, include_content, "milestone_get");

    let milestones = store.read_milestones();
    let milestone = milestones
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(id))
        .ok_or_else(|| MdpError::MilestoneNotFound {
            id: id.to_string(),
            project_path: store.root().to_path_buf(),
        })?;
    let issues = store.read_issues();
    let done = store.config().done_issue_statuses();
    let entry = EnrichedMilestone::new(milestone, &issues, &done, today());

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
