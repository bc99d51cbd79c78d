use crate::corpus::{Corpus, Document};
use crate::scorer::score;

pub const DEFAULT_TOP_K: usize = 3;

/// Snippets are cut at this many characters, with an ellipsis appended when
/// anything was dropped.
pub const SNIPPET_MAX_CHARS: usize = 160;
const ELLIPSIS: &str = "...";

/// One ranked hit: a borrowed document plus its score and display snippet.
/// Lives only as long as the response being assembled.
#[derive(Debug)]
pub struct ScoredMatch<'a> {
    pub doc: &'a Document,
    pub score: f64,
    pub snippet: String,
}

/// Rank the corpus against `query` and return the top `k` matches.
///
/// Full scan, no index: acceptable because the corpus is small and static.
/// Descending by score with a stable sort, so equal-scored documents keep
/// corpus insertion order. Never fails; an empty corpus yields an empty
/// list.
pub fn rank<'a>(query: &str, corpus: &'a Corpus, k: usize) -> Vec<ScoredMatch<'a>> {
    let mut scored: Vec<(&Document, f64)> = corpus
        .docs()
        .iter()
        .map(|doc| (doc, score(query, &doc.text)))
        .collect();
    // Vec::sort_by is stable; ties preserve insertion order by contract.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    scored
        .into_iter()
        .take(k)
        .map(|(doc, score)| ScoredMatch { doc, score, snippet: build_snippet(&doc.text) })
        .collect()
}

/// First `SNIPPET_MAX_CHARS` characters of `text`, ellipsis appended iff
/// truncation happened.
fn build_snippet(text: &str) -> String {
    match text.char_indices().nth(SNIPPET_MAX_CHARS) {
        Some((byte_idx, _)) => {
            let mut s = String::with_capacity(byte_idx + ELLIPSIS.len());
            s.push_str(&text[..byte_idx]);
            s.push_str(ELLIPSIS);
            s
        }
        None => text.to_string(),
    }
}
