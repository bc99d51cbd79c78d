use crate::rank::ScoredMatch;

/// Strategy seam for turning ranked matches into prose. The retrieval core
/// only ever produces citations; anything smarter (a language model, a
/// template engine) plugs in behind this trait.
pub trait AnswerGenerator: Send + Sync {
    fn generate(&self, query: &str, matches: &[ScoredMatch<'_>]) -> String;
}

/// Placeholder generator that emits a fixed string regardless of input.
#[derive(Debug, Default)]
pub struct StubAnswerGenerator;

impl AnswerGenerator for StubAnswerGenerator {
    fn generate(&self, _query: &str, _matches: &[ScoredMatch<'_>]) -> String {
        "This is a stubbed RAG answer. Matching documents were consulted to craft the response."
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_ignores_inputs() {
        let gen = StubAnswerGenerator;
        assert_eq!(gen.generate("anything", &[]), gen.generate("", &[]));
    }
}
