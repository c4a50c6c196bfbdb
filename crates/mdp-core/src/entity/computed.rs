//! Fields derived from the stored entities at read time
//!
//! Nothing here is written back to disk. Relations and progress are
//! recomputed from the full issue list on every command.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::{ChecklistItem, Issue, Milestone};
use crate::format::serialize_number;

/// Date format used by `dueDate`, `startDate` and the date filters
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// Whole percentage of `part` in `whole`, rounded half up
fn percent(part: usize, whole: usize) -> u32 {
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

/// Checklist completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChecklistStats {
    pub checklist_total: usize,
    pub checklist_checked: usize,
    /// `None` when the checklist is empty
    pub checklist_progress: Option<u32>,
}

impl ChecklistStats {
    pub fn of(items: &[ChecklistItem]) -> Self {
        let total = items.len();
        let checked = items.iter().filter(|item| item.done).count();
        ChecklistStats {
            checklist_total: total,
            checklist_checked: checked,
            checklist_progress: (total > 0).then(|| percent(checked, total)),
        }
    }
}

/// Reverse links of an issue: who it blocks and which issues name it as parent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueRelations {
    pub blocks: Vec<String>,
    pub children: Vec<String>,
}

impl IssueRelations {
    pub fn of(issue: &Issue, all: &[Issue]) -> Self {
        let blocks = all
            .iter()
            .filter(|other| other.blocked_by.iter().any(|id| *id == issue.id))
            .map(|other| other.id.clone())
            .collect();
        let children = all
            .iter()
            .filter(|other| other.parent.as_deref() == Some(issue.id.as_str()))
            .map(|other| other.id.clone())
            .collect();
        IssueRelations { blocks, children }
    }
}

/// An issue together with its derived fields
#[derive(Debug, Clone)]
pub struct EnrichedIssue<'a> {
    pub issue: &'a Issue,
    pub relations: IssueRelations,
    pub checklist: ChecklistStats,
}

impl<'a> EnrichedIssue<'a> {
    pub fn new(issue: &'a Issue, all: &[Issue]) -> Self {
        EnrichedIssue {
            issue,
            relations: IssueRelations::of(issue, all),
            checklist: ChecklistStats::of(&issue.checklist),
        }
    }
}

/// Progress of a milestone, measured over the issues assigned to it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneProgress {
    pub total_issues: usize,
    pub completed_issues: usize,
    pub completion_percentage: u32,
    /// Issue count per status, keyed by the status as written on the issue
    pub status_breakdown: BTreeMap<String, usize>,
    #[serde(serialize_with = "serialize_number")]
    pub estimate_total: f64,
    #[serde(serialize_with = "serialize_number")]
    pub estimate_completed: f64,
    #[serde(serialize_with = "serialize_number")]
    pub spent_total: f64,
    pub is_overdue: bool,
    #[serde(flatten)]
    pub checklist: ChecklistStats,
}

impl MilestoneProgress {
    /// Compute progress for `milestone`.
    ///
    /// Issues belong to a milestone when their `milestone` matches its id,
    /// ignoring case. An issue counts as completed when its status is one of
    /// `done_statuses`, also ignoring case. A milestone is overdue once its due
    /// date is before `today` and it is not fully complete.
    pub fn compute(
        milestone: &Milestone,
        issues: &[Issue],
        done_statuses: &[&str],
        today: NaiveDate,
    ) -> Self {
        let assigned: Vec<&Issue> = issues
            .iter()
            .filter(|issue| {
                issue
                    .milestone
                    .as_deref()
                    .is_some_and(|m| m.eq_ignore_ascii_case(&milestone.id))
            })
            .collect();
        let is_done =
            |issue: &Issue| done_statuses.iter().any(|s| s.eq_ignore_ascii_case(&issue.status));

        let total_issues = assigned.len();
        let completed_issues = assigned.iter().filter(|i| is_done(i)).count();
        let completion_percentage = if total_issues == 0 {
            0
        } else {
            percent(completed_issues, total_issues)
        };

        let mut status_breakdown = BTreeMap::new();
        for issue in &assigned {
            *status_breakdown.entry(issue.status.clone()).or_insert(0) += 1;
        }

        let estimate_total: f64 = assigned.iter().filter_map(|i| i.estimate).sum();
        let estimate_completed: f64 = assigned
            .iter()
            .filter(|i| is_done(i))
            .filter_map(|i| i.estimate)
            .sum();
        let spent_total: f64 = assigned.iter().filter_map(|i| i.spent).sum();

        let is_overdue = milestone
            .due_date
            .as_deref()
            .and_then(parse_date)
            .is_some_and(|due| due < today && completion_percentage < 100);

        MilestoneProgress {
            total_issues,
            completed_issues,
            completion_percentage,
            status_breakdown,
            estimate_total,
            estimate_completed,
            spent_total,
            is_overdue,
            checklist: ChecklistStats::of(&milestone.checklist),
        }
    }
}

/// A milestone together with its progress
#[derive(Debug, Clone)]
pub struct EnrichedMilestone<'a> {
    pub milestone: &'a Milestone,
    pub progress: MilestoneProgress,
}

impl<'a> EnrichedMilestone<'a> {
    pub fn new(
        milestone: &'a Milestone,
        issues: &[Issue],
        done_statuses: &[&str],
        today: NaiveDate,
    ) -> Self {
        EnrichedMilestone {
            milestone,
            progress: MilestoneProgress::compute(milestone, issues, done_statuses, today),
        }
    }
}
