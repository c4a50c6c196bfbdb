//! Text processing utilities for tokenization and query cleanup

use std::collections::HashSet;
use std::sync::OnceLock;

/// Common English function words dropped from search queries
static STOP_WORDS: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORDS.get_or_init(|| {
        [
            "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "had", "has",
            "have", "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "my",
            "no", "not", "of", "on", "or", "our", "out", "so", "than", "that", "the", "their",
            "them", "then", "there", "these", "they", "this", "to", "up", "was", "we", "were",
            "what", "when", "which", "who", "will", "with", "would", "you", "your",
        ]
        .iter()
        .copied()
        .collect()
    })
}

/// Whether a (lowercased) token is a stop word
pub fn is_stopword(token: &str) -> bool {
    get_stop_words().contains(token)
}

/// Lowercase and split on every run of characters outside `[a-z0-9]`.
///
/// Non-ASCII letters act as separators; no stemming is applied. Used identically
/// for document fields and queries.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_ascii_lowercase() || c.is_ascii_digit()))
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Drop stop words from query tokens.
///
/// A query made only of stop words keeps its original tokens so it still matches.
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    let filtered: Vec<String> = tokens.iter().filter(|t| !is_stopword(t)).cloned().collect();
    if filtered.is_empty() {
        tokens
    } else {
        filtered
    }
}
