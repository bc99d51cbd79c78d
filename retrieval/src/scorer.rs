use std::collections::HashSet;

/// Score `text` against `query` as the fraction of text tokens that belong
/// to the query's term vocabulary. Lowercase + whitespace split on both
/// sides; query terms collapse to a set, text tokens keep duplicates so
/// every occurrence counts.
///
/// Always returns a finite value in [0, 1]. An empty query term set scores
/// 0 for everything (no signal, no match), as does an empty token sequence.
pub fn score(query: &str, text: &str) -> f64 {
    let query = query.to_lowercase();
    let terms: HashSet<&str> = query.split_whitespace().collect();
    if terms.is_empty() {
        return 0.0;
    }
    let text = text.to_lowercase();
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let overlap = tokens.iter().filter(|t| terms.contains(*t)).count();
    overlap as f64 / tokens.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_overlap_scores_one() {
        assert_eq!(score("rust search", "rust search rust"), 1.0);
    }

    #[test]
    fn partial_overlap() {
        // 2 of 4 tokens match
        assert_eq!(score("rust", "rust is rust powered"), 0.5);
    }

    #[test]
    fn empty_query_scores_zero() {
        assert_eq!(score("", "some document text"), 0.0);
        assert_eq!(score("   \t\n", "some document text"), 0.0);
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(score("rust", ""), 0.0);
        assert_eq!(score("rust", "   "), 0.0);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(score("RUST", "rust"), score("rust", "RUST"));
        assert_eq!(score("Rust", "rust"), 1.0);
    }

    #[test]
    fn duplicate_query_terms_collapse() {
        assert_eq!(score("rust rust rust", "rust tokio"), score("rust", "rust tokio"));
    }

    #[test]
    fn deterministic() {
        let q = "retrieval augmented generation";
        let t = "retrieval augmented generation improves factuality";
        assert_eq!(score(q, t), score(q, t));
    }

    #[test]
    fn bounded() {
        let s = score("a b c", "a a a b b c d e");
        assert!((0.0..=1.0).contains(&s));
    }
}
