//! JSON output formatting for search command

use crate::commands::format::print_success;
use mdp_core::error::Result;
use mdp_core::search::SearchResult;

/// The `data` payload of a search
pub fn search_data(query: &str, results: &[SearchResult]) -> serde_json::Value {
    serde_json::json!({
        "query": query,
        "total": results.len(),
        "results": results,
    })
}

/// Output in JSON format
pub fn output_json(query: &str, results: &[SearchResult]) -> Result<()> {
    print_success(search_data(query, results))
}
