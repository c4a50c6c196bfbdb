//! Output formatting for milestone commands

use serde_json::Value;

use crate::commands::format::table::{cell, log_summary};
use crate::commands::format::{entity_json, list_footer, print_success, render_details};
use mdp_core::entity::computed::EnrichedMilestone;
use mdp_core::error::Result;
use mdp_core::table::{format_table, TableColumn};

/// Fields left out of `milestone list` output
const LIST_OMIT: [&str; 3] = ["content", "log", "filePath"];

/// Columns: ID, TITLE, STATUS, DONE%, ISSUES, DUE
pub const MILESTONE_TABLE_COLUMNS: [TableColumn; 6] = [
    TableColumn::new("ID", 6),
    TableColumn::new("TITLE", 35),
    TableColumn::new("STATUS", 12),
    TableColumn::new("DONE%", 6).right(),
    TableColumn::new("ISSUES", 6).right(),
    TableColumn::new("DUE", 10),
];

/// Stored fields plus progress
pub fn milestone_json(entry: &EnrichedMilestone, omit: &[&str]) -> Result<Value> {
    let computed = [serde_json::to_value(&entry.progress)?];
    entity_json(entry.milestone, &computed, omit)
}

pub fn output_list_json(entries: &[EnrichedMilestone]) -> Result<()> {
    let milestones = entries
        .iter()
        .map(|entry| milestone_json(entry, &LIST_OMIT))
        .collect::<Result<Vec<_>>>()?;
    print_success(serde_json::json!({
        "milestones": milestones,
        "total": entries.len(),
    }))
}

pub fn output_get_json(entry: &EnrichedMilestone, include_content: bool) -> Result<()> {
    let omit: &[&str] = if include_content { &[] } else { &["content"] };
    print_success(milestone_json(entry, omit)?)
}

pub fn render_list_table(entries: &[EnrichedMilestone]) -> String {
    let rows: Vec<Vec<String>> = entries
        .iter()
        .map(|entry| {
            let m = entry.milestone;
            vec![
                m.id.clone(),
                m.title.clone(),
                m.status.clone(),
                format!("{}%", entry.progress.completion_percentage),
                entry.progress.total_issues.to_string(),
                cell(m.due_date.as_deref()),
            ]
        })
        .collect();
    list_footer(format_table(&rows, &MILESTONE_TABLE_COLUMNS), entries.len())
}

pub fn render_details_table(entry: &EnrichedMilestone, include_content: bool) -> String {
    let m = entry.milestone;
    let p = &entry.progress;
    let breakdown = p
        .status_breakdown
        .iter()
        .map(|(status, count)| format!("{}: {}", status, count))
        .collect::<Vec<_>>()
        .join(", ");
    let fields = [
        ("id", m.id.clone()),
        ("title", m.title.clone()),
        ("status", m.status.clone()),
        ("priority", m.priority.clone()),
        ("labels", m.labels.join(", ")),
        ("startDate", cell(m.start_date.as_deref())),
        ("dueDate", cell(m.due_date.as_deref())),
        (
            "progress",
            format!(
                "{}/{} ({}%)",
                p.completed_issues, p.total_issues, p.completion_percentage
            ),
        ),
        ("statuses", breakdown),
        ("overdue", if p.is_overdue { "yes" } else { "no" }.to_string()),
        ("lastLog", m.log.last().map(log_summary).unwrap_or_default()),
        ("updatedAt", cell(m.updated_at.as_deref())),
    ];
    render_details(&fields, include_content.then_some(m.content.as_str()))
}
