//! Table output formatting for search command

use mdp_core::search::SearchResult;
use mdp_core::table::{format_table, TableColumn};

/// Columns: TYPE, ID, TITLE, STATUS, SCORE, MATCHED IN
pub const SEARCH_TABLE_COLUMNS: [TableColumn; 6] = [
    TableColumn::new("TYPE", 10),
    TableColumn::new("ID", 8),
    TableColumn::new("TITLE", 35),
    TableColumn::new("STATUS", 12),
    TableColumn::new("SCORE", 6).right(),
    TableColumn::new("MATCHED IN", 20),
];

/// Render results as a table followed by a summary line
pub fn render_table(query: &str, results: &[SearchResult]) -> String {
    let rows: Vec<Vec<String>> = results
        .iter()
        .map(|r| {
            vec![
                r.entity.to_string(),
                r.id.clone(),
                r.title.clone(),
                r.status.clone(),
                r.score.to_string(),
                r.matches
                    .iter()
                    .map(|m| m.field.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            ]
        })
        .collect();

    format!(
        "{}\n\nQuery: \"{}\" — {} result(s)",
        format_table(&rows, &SEARCH_TABLE_COLUMNS),
        query,
        results.len()
    )
}

/// Output in table format
pub fn output_table(query: &str, results: &[SearchResult]) {
    println!("{}", render_table(query, results));
}
