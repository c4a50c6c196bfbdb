//! Milestone filtering and sort keys

use std::cmp::Ordering;
use std::str::FromStr;

use super::{any_eq_ignore_case, names_list};
use crate::bail_invalid;
use crate::entity::computed::EnrichedMilestone;
use crate::error::{MdpError, Result};

/// Filter configuration for milestones; text comparisons ignore case
#[derive(Debug, Clone, Default)]
pub struct MilestoneFilter {
    pub statuses: Vec<String>,
    pub priority: Option<String>,
    /// Milestone must carry at least one of these labels
    pub labels: Vec<String>,
    pub overdue: Option<bool>,
}

impl MilestoneFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_statuses(mut self, statuses: Vec<String>) -> Self {
        self.statuses = statuses;
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

    pub fn with_overdue(mut self, overdue: Option<bool>) -> Self {
        self.overdue = overdue;
        self
    }

    pub fn matches(&self, entry: &EnrichedMilestone) -> bool {
        let m = entry.milestone;
        if !self.statuses.is_empty() && !any_eq_ignore_case(&self.statuses, &m.status) {
            return false;
        }
        if let Some(priority) = &self.priority {
            if !m.priority.eq_ignore_ascii_case(priority) {
                return false;
            }
        }
        if !self.labels.is_empty()
            && !m.labels.iter().any(|l| any_eq_ignore_case(&self.labels, l))
        {
            return false;
        }
        self.overdue
            .map_or(true, |wanted| wanted == entry.progress.is_overdue)
    }
}

/// Sort key for `milestone list --sort`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MilestoneSortField {
    #[default]
    Id,
    Title,
    Status,
    Priority,
    Created,
    Updated,
    DueDate,
    Completion,
}

impl MilestoneSortField {
    const NAMES: [&'static str; 8] = [
        "id", "title", "status", "priority", "created", "updated", "dueDate", "completion",
    ];

    pub fn compare(&self, a: &EnrichedMilestone, b: &EnrichedMilestone) -> Ordering {
        let (x, y) = (a.milestone, b.milestone);
        let text = |value: &Option<String>| value.clone().unwrap_or_default();

        match self {
            MilestoneSortField::Id => x.id.cmp(&y.id),
            MilestoneSortField::Title => x.title.cmp(&y.title),
            MilestoneSortField::Status => x.status.cmp(&y.status),
            MilestoneSortField::Priority => x.priority.cmp(&y.priority),
            MilestoneSortField::Created => text(&x.created_at).cmp(&text(&y.created_at)),
            MilestoneSortField::Updated => text(&x.updated_at).cmp(&text(&y.updated_at)),
            MilestoneSortField::DueDate => text(&x.due_date).cmp(&text(&y.due_date)),
            MilestoneSortField::Completion => a
                .progress
                .completion_percentage
                .cmp(&b.progress.completion_percentage),
        }
    }
}

impl FromStr for MilestoneSortField {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "id" => Ok(MilestoneSortField::Id),
            "title" => Ok(MilestoneSortField::Title),
            "status" => Ok(MilestoneSortField::Status),
            "priority" => Ok(MilestoneSortField::Priority),
            "created" => Ok(MilestoneSortField::Created),
            "updated" => Ok(MilestoneSortField::Updated),
            "dueDate" => Ok(MilestoneSortField::DueDate),
            "completion" => Ok(MilestoneSortField::Completion),
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
