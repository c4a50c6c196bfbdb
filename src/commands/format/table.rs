//! Table helpers shared by the list and get commands

use mdp_core::entity::LogEntry;
use mdp_core::table::{format_table, TableColumn};

/// Columns for a single entity shown as field/value pairs
pub const DETAIL_TABLE_COLUMNS: [TableColumn; 2] =
    [TableColumn::new("FIELD", 14), TableColumn::new("VALUE", 60)];

/// Render `fields` as a field/value table, followed by the body when given
pub fn render_details(fields: &[(&str, String)], content: Option<&str>) -> String {
    let rows: Vec<Vec<String>> = fields
        .iter()
        .map(|(name, value)| vec![name.to_string(), value.clone()])
        .collect();
    let table = format_table(&rows, &DETAIL_TABLE_COLUMNS);

    match content.map(str::trim_end) {
        Some(body) if !body.is_empty() => format!("{}\n\n{}", table, body),
        _ => table,
    }
}

/// Blank line and item count printed under list tables
pub fn list_footer(table: String, total: usize) -> String {
    format!("{}\n\nTotal: {}", table, total)
}

/// Display text for an optional cell
pub fn cell(value: Option<&str>) -> String {
    value.unwrap_or("").to_string()
}

/// One-line summary of a log entry: `<timestamp> <author>: <body>`, plus health when set
pub fn log_summary(entry: &LogEntry) -> String {
    let line = format!("{} {}: {}", entry.timestamp(), entry.author(), entry.body());
    match entry.health() {
        Some(health) => format!("{} [{}]", line, health),
        None => line,
    }
}
