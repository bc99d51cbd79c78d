use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A single retrievable document. Immutable once the corpus is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub doc_id: String,
    pub title: String,
    pub text: String,
}

/// Read-only document collection, owned by the caller and passed by
/// reference into ranking. Insertion order is preserved and observable:
/// equal-scored results come back in this order.
#[derive(Debug, Default)]
pub struct Corpus {
    docs: Vec<Document>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate `doc_id`s.
    pub fn new(docs: Vec<Document>) -> Result<Self> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(docs.len());
        for doc in &docs {
            if !seen.insert(doc.doc_id.as_str()) {
                bail!("duplicate doc_id in corpus: {}", doc.doc_id);
            }
        }
        Ok(Self { docs })
    }

    /// Load a corpus from a JSON file containing an array of documents.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading corpus file {}", path.display()))?;
        let docs: Vec<Document> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing corpus file {}", path.display()))?;
        tracing::info!(count = docs.len(), path = %path.display(), "loaded corpus");
        Self::new(docs)
    }

    pub fn docs(&self) -> &[Document] {
        &self.docs
    }

    pub fn get(&self, doc_id: &str) -> Option<&Document> {
        self.docs.iter().find(|d| d.doc_id == doc_id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}
