//! Issue filtering and sort keys

use std::cmp::Ordering;
use std::str::FromStr;

use super::{any_eq_ignore_case, matches_ref_or_none, names_list};
use crate::bail_invalid;
use crate::entity::Issue;
use crate::error::{MdpError, Result};

/// Suffix that turns a `YYYY-MM-DD` bound into the last instant of that day
const END_OF_DAY: &str = "T23:59:59.999Z";

/// Filter configuration for issues.
///
/// Every set criterion must match. Text comparisons ignore case. For
/// `assignee`, `milestone` and `parent` the value `none` selects issues where
/// the field is unset. Date bounds compare the stored ISO strings.
#[derive(Debug, Clone, Default)]
pub struct IssueFilter {
    pub statuses: Vec<String>,
    pub types: Vec<String>,
    pub priority: Option<String>,
    /// Issue must carry at least one of these labels
    pub labels: Vec<String>,
    pub assignee: Option<String>,
    pub milestone: Option<String>,
    /// `Some(true)` keeps only issues with `blockedBy` entries
    pub blocked: Option<bool>,
    pub parent: Option<String>,
    pub created_after: Option<String>,
    pub created_before: Option<String>,
    pub due_after: Option<String>,
    pub due_before: Option<String>,
}

impl IssueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(mut self, statuses: Vec<String>) -> Self {
        self.statuses = statuses;
        self
    }

    pub fn with_types(mut self, types: Vec<String>) -> Self {
        self.types = types;
        self
    }

    pub fn with_priority(mut self, priority: Option<String>) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_assignee(mut self, assignee: Option<String>) -> Self {
        self.assignee = assignee;
        self
    }

    pub fn with_milestone(mut self, milestone: Option<String>) -> Self {
        self.milestone = milestone;
        self
    }

    pub fn with_blocked(mut self, blocked: Option<bool>) -> Self {
        self.blocked = blocked;
        self
    }

    pub fn with_parent(mut self, parent: Option<String>) -> Self {
        self.parent = parent;
        self
    }

    /// Set the created-at window (inclusive `YYYY-MM-DD` bounds)
    pub fn with_created(mut self, after: Option<String>, before: Option<String>) -> Self {
        self.created_after = after;
        self.created_before = before;
        self
    }

    /// Set the due-date window (inclusive `YYYY-MM-DD` bounds)
    pub fn with_due(mut self, after: Option<String>, before: Option<String>) -> Self {
        self.due_after = after;
        self.due_before = before;
        self
    }

    /// Check if an issue matches all configured filters
    pub fn matches(&self, issue: &Issue) -> bool {
        self.matches_status(issue)
            && self.matches_type(issue)
            && self.matches_priority(issue)
            && self.matches_labels(issue)
            && self.matches_refs(issue)
            && self.matches_blocked(issue)
            && self.matches_created(issue)
            && self.matches_due(issue)
    }

    fn matches_status(&self, issue: &Issue) -> bool {
        self.statuses.is_empty() || any_eq_ignore_case(&self.statuses, &issue.status)
    }

    fn matches_type(&self, issue: &Issue) -> bool {
        if self.types.is_empty() {
            return true;
        }
        issue
            .issue_type
            .as_deref()
            .is_some_and(|t| any_eq_ignore_case(&self.types, t))
    }

    fn matches_priority(&self, issue: &Issue) -> bool {
        match &self.priority {
            None => true,
            Some(wanted) => issue
                .priority
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case(wanted)),
        }
    }

    fn matches_labels(&self, issue: &Issue) -> bool {
        self.labels.is_empty()
            || issue
                .labels
                .iter()
                .any(|label| any_eq_ignore_case(&self.labels, label))
    }

    fn matches_refs(&self, issue: &Issue) -> bool {
        let check = |filter: &Option<String>, value: Option<&str>| {
            filter
                .as_deref()
                .map_or(true, |f| matches_ref_or_none(f, value))
        };
        check(&self.assignee, issue.assignee.as_deref())
            && check(&self.milestone, issue.milestone.as_deref())
            && check(&self.parent, issue.parent.as_deref())
    }

    fn matches_blocked(&self, issue: &Issue) -> bool {
        self.blocked
            .map_or(true, |wanted| wanted == !issue.blocked_by.is_empty())
    }

    fn matches_created(&self, issue: &Issue) -> bool {
        let created = issue.created_at.as_deref().unwrap_or("");
        if let Some(after) = &self.created_after {
            if created < after.as_str() {
                return false;
            }
        }
        if let Some(before) = &self.created_before {
            if created > format!("{}{}", before, END_OF_DAY).as_str() {
                return false;
            }
        }
        true
    }

    fn matches_due(&self, issue: &Issue) -> bool {
        if self.due_after.is_none() && self.due_before.is_none() {
            return true;
        }
        let Some(due) = issue.due_date.as_deref() else {
            return false;
        };
        self.due_after.as_deref().map_or(true, |after| due >= after)
            && self.due_before.as_deref().map_or(true, |before| due <= before)
    }
}

/// Sort key for `issue list --sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueSortField {
    #[default]
    Id,
    Title,
    Status,
    Priority,
    Type,
    Created,
    Updated,
    Estimate,
    Spent,
    DueDate,
}

impl IssueSortField {
    const NAMES: [&'static str; 10] = [
        "id", "title", "status", "priority", "type", "created", "updated", "estimate", "spent",
        "dueDate",
    ];

    /// Compare two issues by this key. Missing values sort as empty text or zero.
    pub fn compare(&self, a: &Issue, b: &Issue) -> Ordering {
        fn text(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }
        fn number(value: Option<f64>) -> f64 {
            value.unwrap_or(0.0)
        }

        match self {
            IssueSortField::Id => a.id.cmp(&b.id),
            IssueSortField::Title => a.title.cmp(&b.title),
            IssueSortField::Status => a.status.cmp(&b.status),
            IssueSortField::Priority => text(&a.priority).cmp(text(&b.priority)),
            IssueSortField::Type => text(&a.issue_type).cmp(text(&b.issue_type)),
            IssueSortField::Created => text(&a.created_at).cmp(text(&b.created_at)),
            IssueSortField::Updated => text(&a.updated_at).cmp(text(&b.updated_at)),
            IssueSortField::Estimate => number(a.estimate).total_cmp(&number(b.estimate)),
            IssueSortField::Spent => number(a.spent).total_cmp(&number(b.spent)),
            IssueSortField::DueDate => text(&a.due_date).cmp(text(&b.due_date)),
        }
    }
}

impl FromStr for IssueSortField {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(IssueSortField::Id),
            "title" => Ok(IssueSortField::Title),
            "status" => Ok(IssueSortField::Status),
            "priority" => Ok(IssueSortField::Priority),
            "type" => Ok(IssueSortField::Type),
            "created" => Ok(IssueSortField::Created),
            "updated" => Ok(IssueSortField::Updated),
            "estimate" => Ok(IssueSortField::Estimate),
            "spent" => Ok(IssueSortField::Spent),
            "dueDate" => Ok(IssueSortField::DueDate),
            other => bail_invalid!(
                format!(
                    "Invalid sort field \"{}\". Valid fields: {}",
                    other,
                    names_list(&Self::NAMES)
                ),
                "sort" => other
            ),
        }
    }
}
