//! Lexical search over issues, milestones and the project record
//!
//! Ranking is field-weighted BM25 computed fresh for every call: the caller
//! hands in an already-assembled corpus of [`SearchDocument`]s and a free-text
//! query, and gets back a ranked, capped list of [`SearchResult`]s with
//! highlighted snippets. Nothing is cached between calls.

mod bm25;
pub mod corpus;
mod snippet;


use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::error::{detail, MdpError};
use crate::text::{remove_stopwords, tokenize};

pub use bm25::{idf, tf_norm, B, K1};
pub use snippet::{generate_snippet, SNIPPET_CONTEXT};

/// Maximum number of results returned when the caller does not ask for a limit
pub const DEFAULT_LIMIT: usize = 20;

/// Weight applied to a field name that is not one of the known searchable fields
pub const DEFAULT_FIELD_WEIGHT: f64 = 1.0;

/// A named chunk of an entity's searchable text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchableField {
    Title,
    Content,
    Log,
    Checklist,
}

impl SearchableField {
    /// Every searchable field, in canonical order
    pub const ALL: [SearchableField; 4] = [
        SearchableField::Title,
        SearchableField::Content,
        SearchableField::Log,
        SearchableField::Checklist,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchableField::Title => "title",
            SearchableField::Content => "content",
            SearchableField::Log => "log",
            SearchableField::Checklist => "checklist",
        }
    }

    /// Multiplier applied to this field's BM25 sub-score
    pub fn weight(&self) -> f64 {
        match self {
            SearchableField::Title => 3.0,
            SearchableField::Log => 1.5,
            SearchableField::Content => 1.0,
            SearchableField::Checklist => 1.0,
        }
    }

    fn valid_names() -> String {
        Self::ALL
            .iter()
            .map(|f| f.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Weight for a raw field name, falling back to [`DEFAULT_FIELD_WEIGHT`] for unknown names
pub fn weight_for_name(name: &str) -> f64 {
    name.parse::<SearchableField>()
        .map(|field| field.weight())
        .unwrap_or(DEFAULT_FIELD_WEIGHT)
}

impl fmt::Display for SearchableField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchableField {
    type Err = MdpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(SearchableField::Title),
            "content" => Ok(SearchableField::Content),
            "log" => Ok(SearchableField::Log),
            "checklist" => Ok(SearchableField::Checklist),
            other => Err(MdpError::invalid_input_with(
                format!(
                    "Invalid search field \"{}\". Valid fields: {}",
                    other,
                    Self::valid_names()
                ),
                vec![("field".to_string(), detail(other))],
            )),
        }
    }
}

/// Kind of tracked entity a document was built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Issue,
    Milestone,
    Project,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Issue => write!(f, "issue"),
            EntityKind::Milestone => write!(f, "milestone"),
            EntityKind::Project => write!(f, "project"),
        }
    }
}

/// One named field of a document
#[derive(Debug, Clone, PartialEq)]
pub struct SearchField {
    pub name: SearchableField,
    pub text: String,
}

impl SearchField {
    pub fn new(name: SearchableField, text: impl Into<String>) -> Self {
        SearchField {
            name,
            text: text.into(),
        }
    }
}

/// Searchable surface of one entity at query time.
///
/// `title` and `status` are carried into results for display and are
/// independent of any `title` entry in `fields`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchDocument {
    pub id: String,
    pub entity: EntityKind,
    pub title: String,
    pub status: String,
    pub fields: Vec<SearchField>,
}

/// A field that contributed to a document's score, with a highlighted excerpt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub field: SearchableField,
    pub snippet: String,
}

/// A ranked match
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub entity: EntityKind,
    pub id: String,
    pub title: String,
    pub status: String,
    /// BM25 score rounded to 2 decimals; whole values serialize as integers
    #[serde(serialize_with = "crate::format::serialize_number")]
    pub score: f64,
    /// Matched fields in the order they appear on the source document
    pub matches: Vec<FieldMatch>,
}

/// Tokenize a query into its working term set: stop words removed (unless that
/// would leave nothing), duplicates dropped, first occurrence order kept.
pub fn query_terms(query: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    remove_stopwords(tokenize(query))
        .into_iter()
        .filter(|term| seen.insert(term.clone()))
        .collect()
}

fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Rank `documents` against `query` and return at most `limit` results.
///
/// Empty queries, empty corpora and queries with no matches all yield an
/// empty list. Ties keep the input document order.
pub fn search(documents: &[SearchDocument], query: &str, limit: usize) -> Vec<SearchResult> {
    let start = Instant::now();

    let terms = query_terms(query);
    if terms.is_empty() || documents.is_empty() {
        return Vec::new();
    }

    let infos: Vec<bm25::DocTermInfo> = documents.iter().map(bm25::DocTermInfo::new).collect();
    let stats = bm25::CorpusStats::build(&infos, &terms);

    let mut results: Vec<SearchResult> = documents
        .iter()
        .zip(&infos)
        .filter_map(|(doc, info)| {
            let (score, matches) = bm25::score_document(info, &stats, &terms);
            (score > 0.0).then(|| SearchResult {
                entity: doc.entity,
                id: doc.id.clone(),
                title: doc.title.clone(),
                status: doc.status.clone(),
                score: round_score(score),
                matches,
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep document order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    let matched = results.len();
    results.truncate(limit);

    debug!(
        doc_count = documents.len(),
        term_count = terms.len(),
        matched,
        returned = results.len(),
        elapsed = ?start.elapsed(),
        "search"
    );

    results
}
