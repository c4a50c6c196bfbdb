//! Field-weighted BM25 scoring
//!
//! ```text
//! idf(t)  = ln((N - df(t) + 0.5) / (df(t) + 0.5) + 1)
//! tfNorm  = tf * (k1 + 1) / (tf + k1 * (1 - b + b * |D| / avgdl))
//! score   = Σ_fields weight(field) * Σ_t idf(t) * tfNorm(t, field)
//! ```
//!
//! `|D|` is the token count of the whole document (all fields combined).

use std::collections::HashMap;

use super::snippet::generate_snippet;
use super::{FieldMatch, SearchDocument, SearchField};
use crate::text::tokenize;

/// Term frequency saturation
pub const K1: f64 = 1.5;

/// Length normalization strength
pub const B: f64 = 0.75;

/// Smoothed inverse document frequency; never negative, even when `df == n`
pub fn idf(doc_count: usize, df: usize) -> f64 {
    let n = doc_count as f64;
    let df = df as f64;
    ((n - df + 0.5) / (df + 0.5) + 1.0).ln()
}

/// Saturated, length-normalized term frequency
pub fn tf_norm(tf: usize, doc_len: usize, avg_doc_len: f64) -> f64 {
    let tf = tf as f64;
    let length_ratio = doc_len as f64 / avg_doc_len;
    (tf * (K1 + 1.0)) / (tf + K1 * (1.0 - B + B * length_ratio))
}

/// Term counts for one field
struct FieldTerms<'a> {
    field: &'a SearchField,
    counts: HashMap<String, usize>,
}

/// Tokenized view of one document
pub(super) struct DocTermInfo<'a> {
    total_tokens: usize,
    fields: Vec<FieldTerms<'a>>,
}

impl<'a> DocTermInfo<'a> {
    pub(super) fn new(doc: &'a SearchDocument) -> Self {
        let mut total_tokens = 0;
        let fields = doc
            .fields
            .iter()
            .map(|field| {
                let tokens = tokenize(&field.text);
                total_tokens += tokens.len();

                let mut counts = HashMap::new();
                for token in tokens {
                    *counts.entry(token).or_insert(0) += 1;
                }
                FieldTerms { field, counts }
            })
            .collect();

        DocTermInfo {
            total_tokens,
            fields,
        }
    }

    fn contains(&self, term: &str) -> bool {
        self.fields.iter().any(|f| f.counts.contains_key(term))
    }
}

/// Corpus-wide statistics for a single search call
pub(super) struct CorpusStats {
    doc_count: usize,
    avg_doc_len: f64,
    doc_frequency: HashMap<String, usize>,
}

impl CorpusStats {
    /// Document frequency is only tracked for the query terms
    pub(super) fn build(infos: &[DocTermInfo], terms: &[String]) -> Self {
        let doc_count = infos.len();
        let total_len: usize = infos.iter().map(|info| info.total_tokens).sum();

        let mut doc_frequency = HashMap::new();
        for term in terms {
            let df = infos.iter().filter(|info| info.contains(term)).count();
            if df > 0 {
                doc_frequency.insert(term.clone(), df);
            }
        }

        CorpusStats {
            doc_count,
            avg_doc_len: if doc_count == 0 {
                0.0
            } else {
                total_len as f64 / doc_count as f64
            },
            doc_frequency,
        }
    }

    fn idf(&self, term: &str) -> f64 {
        let df = self.doc_frequency.get(term).copied().unwrap_or(0);
        idf(self.doc_count, df)
    }
}

/// Score one document and collect its matched fields.
///
/// Fields are visited in document order; each field with a positive BM25
/// sub-score adds `weight * sub_score` and contributes a [`FieldMatch`] when a
/// snippet can be extracted.
pub(super) fn score_document(
    info: &DocTermInfo,
    stats: &CorpusStats,
    terms: &[String],
) -> (f64, Vec<FieldMatch>) {
    let mut total = 0.0;
    let mut matches = Vec::new();

    for field_terms in &info.fields {
        let mut field_score = 0.0;
        for term in terms {
            let tf = field_terms.counts.get(term).copied().unwrap_or(0);
            if tf == 0 {
                continue;
            }
            field_score +=
                stats.idf(term) * tf_norm(tf, info.total_tokens, stats.avg_doc_len);
        }

        if field_score > 0.0 {
            let field = field_terms.field;
            total += field_score * field.name.weight();
            if let Some(snippet) = generate_snippet(&field.text, terms) {
                matches.push(FieldMatch {
                    field: field.name,
                    snippet,
                });
            }
        }
    }

    (total, matches)
}
