//! Corpus loading.
//!
//! A corpus is one JSON file mapping document id to an entry carrying the
//! extracted (or ground-truth) article body, the format used by the
//! article-extraction benchmark suites:
//!
//! ```json
//! {
//!   "some-article-id": { "articleBody": "Full text ..." },
//!   "another-id": { "articleBody": null }
//! }
//! ```
//!
//! Corpora are held in a `BTreeMap` so document iteration is always in
//! lexicographic id order, keeping report output reproducible regardless of
//! the key order in the input file.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// One document entry in a corpus file.
///
/// Unknown fields in the entry (titles, dates, URLs) are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DocumentEntry {
    /// The article body text. Absent or null is treated as empty text.
    #[serde(rename = "articleBody", default)]
    pub article_body: Option<String>,
}

impl DocumentEntry {
    /// Create an entry from body text, mainly for tests and examples.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            article_body: Some(body.into()),
        }
    }

    /// The body text, with absent treated as empty.
    #[must_use]
    pub fn text(&self) -> &str {
        self.article_body.as_deref().unwrap_or("")
    }
}

/// A corpus: document id → entry, iterated in lexicographic id order.
pub type Corpus = BTreeMap<String, DocumentEntry>;

/// Load a corpus from a JSON file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Corpus> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let corpus: Corpus =
        serde_json::from_str(&content).map_err(|e| Error::corpus_parse(path, e))?;
    log::debug!("Loaded {} documents from {}", corpus.len(), path.display());
    Ok(corpus)
}

/// The body text for `doc_id`, with a missing document or missing body
/// treated as empty text, never as an error.
#[must_use]
pub fn text_of<'a>(corpus: &'a Corpus, doc_id: &str) -> &'a str {
    corpus.get(doc_id).map(DocumentEntry::text).unwrap_or("")
}
