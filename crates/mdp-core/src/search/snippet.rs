//! Snippet extraction and highlighting

use regex::RegexBuilder;

/// Target amount of context around the anchoring match, split evenly before and after
pub const SNIPPET_CONTEXT: usize = 80;

const ELLIPSIS: &str = "...";

fn floor_char_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(text: &str, mut index: usize) -> usize {
    while index < text.len() && !text.is_char_boundary(index) {
        index += 1;
    }
    index
}

/// Build a highlighted excerpt of `text` around the earliest occurrence of any
/// query term, or `None` if no term occurs.
///
/// The window keeps about [`SNIPPET_CONTEXT`] characters of context, is pulled
/// in to word boundaries without cutting the anchoring term, and is marked with
/// `...` on each side that was clipped. Every case-insensitive occurrence of
/// every term inside the window is wrapped in `**`.
pub fn generate_snippet(text: &str, query_terms: &[String]) -> Option<String> {
    // ASCII lowercasing keeps byte offsets aligned with `text`
    let lower = text.to_ascii_lowercase();

    let (pos, term_len) = query_terms
        .iter()
        .filter(|term| !term.is_empty())
        .filter_map(|term| lower.find(term.as_str()).map(|pos| (pos, term.len())))
        .min_by_key(|(pos, _)| *pos)?;
    let match_end = pos + term_len;

    let half = SNIPPET_CONTEXT / 2;
    let mut start = floor_char_boundary(text, pos.saturating_sub(half));
    let mut end = ceil_char_boundary(text, (match_end + half).min(text.len()));

    if start > 0 {
        if let Some(offset) = text[start..].find(' ') {
            let space = start + offset;
            if space < pos {
                start = space + 1;
            }
        }
    }
    if end < text.len() {
        let space = if text.as_bytes()[end] == b' ' {
            Some(end)
        } else {
            text[..end].rfind(' ')
        };
        if let Some(space) = space {
            if space > match_end {
                end = space;
            }
        }
    }

    let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
    if start > 0 {
        snippet.push_str(ELLIPSIS);
    }
    snippet.push_str(&text[start..end]);
    if end < text.len() {
        snippet.push_str(ELLIPSIS);
    }

    Some(highlight(snippet, query_terms))
}

/// Wrap each case-insensitive occurrence of each term in `**`, one term at a time
fn highlight(mut snippet: String, query_terms: &[String]) -> String {
    for term in query_terms.iter().filter(|term| !term.is_empty()) {
        let Ok(re) = RegexBuilder::new(&regex::escape(term))
            .case_insensitive(true)
            .build()
        else {
            continue;
        };
        snippet = re.replace_all(&snippet, "**${0}**").into_owned();
    }
    snippet
}
