pub mod answer;
pub mod corpus;
pub mod rank;
pub mod scorer;

pub use answer::{AnswerGenerator, StubAnswerGenerator};
pub use corpus::{Corpus, Document};
pub use rank::{rank, ScoredMatch, DEFAULT_TOP_K};
pub use scorer::score;
