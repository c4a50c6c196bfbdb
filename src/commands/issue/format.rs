//! Output formatting for issue commands

use serde_json::Value;

use crate::commands::format::table::{cell, log_summary};
use crate::commands::format::{entity_json, list_footer, print_success, render_details};
use mdp_core::entity::computed::EnrichedIssue;
use mdp_core::error::Result;
use mdp_core::table::{format_table, TableColumn};

/// Fields left out of `issue list` output
const LIST_OMIT: [&str; 3] = ["content", "log", "filePath"];

/// Columns: ID, TITLE, STATUS, PRIORITY, TYPE, ASSIGNEE
pub const ISSUE_TABLE_COLUMNS: [TableColumn; 6] = [
    TableColumn::new("ID", 8),
    TableColumn::new("TITLE", 40),
    TableColumn::new("STATUS", 12),
    TableColumn::new("PRIORITY", 8),
    TableColumn::new("TYPE", 10),
    TableColumn::new("ASSIGNEE", 12),
];

/// Stored fields plus relations and checklist progress
pub fn issue_json(entry: &EnrichedIssue, omit: &[&str]) -> Result<Value> {
    let computed = [
        serde_json::to_value(&entry.relations)?,
        serde_json::to_value(entry.checklist)?,
    ];
    entity_json(entry.issue, &computed, omit)
}

pub fn output_list_json(entries: &[EnrichedIssue]) -> Result<()> {
    let issues = entries
        .iter()
        .map(|entry| issue_json(entry, &LIST_OMIT))
        .collect::<Result<Vec<_>>>()?;
    print_success(serde_json::json!({
        "issues": issues,
        "total": entries.len(),
    }))
}

pub fn output_get_json(entry: &EnrichedIssue, include_content: bool) -> Result<()> {
    let omit: &[&str] = if include_content { &[] } else { &["content"] };
    print_success(issue_json(entry, omit)?)
}

pub fn render_list_table(entries: &[EnrichedIssue]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let issue = entry.issue;
            vec![
                issue.id.clone(),
                issue.title.clone(),
                issue.status.clone(),
                cell(issue.priority.as_deref()),
                cell(issue.issue_type.as_deref()),
                cell(issue.assignee.as_deref()),
            ]
        })
        .collect();
    list_footer(format_table(&rows, &ISSUE_TABLE_COLUMNS), entries.len())
}

pub fn render_details_table(entry: &EnrichedIssue, include_content: bool) -> String {
    let issue = entry.issue;
    let checklist = match entry.checklist.checklist_progress {
        Some(pct) => format!(
            "{}/{} ({}%)",
            entry.checklist.checklist_checked, entry.checklist.checklist_total, pct
        ),
        None => String::new(),
    };
    let fields = [
        ("id", issue.id.clone()),
        ("title", issue.title.clone()),
        ("status", issue.status.clone()),
        ("type", cell(issue.issue_type.as_deref())),
        ("priority", cell(issue.priority.as_deref())),
        ("assignee", cell(issue.assignee.as_deref())),
        ("milestone", cell(issue.milestone.as_deref())),
        ("labels", issue.labels.join(", ")),
        ("dueDate", cell(issue.due_date.as_deref())),
        ("parent", cell(issue.parent.as_deref())),
        ("blockedBy", issue.blocked_by.join(", ")),
        ("blocks", entry.relations.blocks.join(", ")),
        ("children", entry.relations.children.join(", ")),
        ("checklist", checklist),
        ("lastLog", issue.log.last().map(log_summary).unwrap_or_default()),
        ("updatedAt", cell(issue.updated_at.as_deref())),
    ];
    render_details(&fields, include_content.then_some(issue.content.as_str()))
}
