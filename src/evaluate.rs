//! Per-document evaluation across prediction sources.
//!
//! The evaluator runs tokenizer → shingle builder → overlap scorer for one
//! (ground truth, prediction) pair per source. The truth tokenization and
//! shingle collection are computed once per document and reused across all
//! sources. A source with no text for a document contributes the empty
//! string, which scores as an empty prediction; it is never skipped and
//! never an error.
//!
//! # Example
//!
//! ```rust
//! use shingle_bench::{EvalConfig, Evaluator};
//!
//! let evaluator = Evaluator::new(EvalConfig::default());
//! let report = evaluator.evaluate_document(
//!     "doc-1",
//!     "the cat sat on the mat",
//!     &[("alpha", "the cat sat on the mat"), ("beta", "")],
//! );
//!
//! assert!((report.sources[0].overlap.f1 - 1.0).abs() < 1e-9);
//! assert_eq!(report.sources[1].overlap.f1, 0.0);
//! ```

use crate::config::EvalConfig;
use crate::corpus::{text_of, Corpus};
use crate::score::{score, Overlap};
use crate::shingle::Shingles;
use serde::{Deserialize, Serialize};

/// Scores for one prediction source on one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceScore {
    /// Source name (e.g. the extractor implementation).
    pub source: String,
    /// Token length of the prediction text.
    pub tokens: usize,
    /// Overlap counts and derived metrics against the truth.
    pub overlap: Overlap,
}

impl SourceScore {
    /// The score an absent or empty prediction gets against `truth_shingles`.
    fn empty(source: &str, truth: &Shingles) -> Self {
        Self {
            source: source.to_string(),
            tokens: 0,
            overlap: Overlap {
                false_negatives: truth.total(),
                ..Overlap::default()
            },
        }
    }
}

/// Evaluation of one document across all prediction sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentReport {
    /// Document identifier, shared across corpora.
    pub doc_id: String,
    /// Token length of the ground-truth text.
    pub truth_tokens: usize,
    /// One score per source, in the order the sources were given.
    pub sources: Vec<SourceScore>,
}

impl DocumentReport {
    /// The score for a named source, if that source was evaluated.
    #[must_use]
    pub fn source(&self, name: &str) -> Option<&SourceScore> {
        self.sources.iter().find(|s| s.source == name)
    }
}

/// Applies tokenizer → shingle builder → overlap scorer per document and
/// source.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The configuration this evaluator runs under.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate one document against every named prediction text.
    ///
    /// The truth is tokenized and shingled once, then scored against each
    /// prediction in turn.
    #[must_use]
    pub fn evaluate_document(
        &self,
        doc_id: &str,
        truth_text: &str,
        predictions: &[(&str, &str)],
    ) -> DocumentReport {
        let strategy = self.config.token_strategy;
        let truth_tokens = strategy.tokenize(truth_text);
        let truth_shingles = Shingles::build(
            &truth_tokens,
            self.config.ngram_size,
            self.config.overlap_strategy,
        );

        let sources = predictions
            .iter()
            .map(|(name, text)| {
                if text.is_empty() {
                    return SourceScore::empty(name, &truth_shingles);
                }
                let pred_tokens = strategy.tokenize(text);
                let pred_shingles = Shingles::build(
                    &pred_tokens,
                    self.config.ngram_size,
                    self.config.overlap_strategy,
                );
                SourceScore {
                    source: (*name).to_string(),
                    tokens: pred_tokens.len(),
                    overlap: score(&truth_shingles, &pred_shingles),
                }
            })
            .collect();

        DocumentReport {
            doc_id: doc_id.to_string(),
            truth_tokens: truth_tokens.len(),
            sources,
        }
    }

    /// Evaluate every document in the ground-truth corpus against each
    /// prediction corpus.
    ///
    /// The ground truth defines the document universe: its ids are iterated
    /// in lexicographic order, every id yields exactly one report, and ids
    /// present only in a prediction corpus are ignored. Documents a source
    /// is missing score as empty text.
    #[must_use]
    pub fn evaluate_corpus(
        &self,
        truth: &Corpus,
        sources: &[(&str, &Corpus)],
    ) -> Vec<DocumentReport> {
        log::info!(
            "Evaluating {} documents across {} sources",
            truth.len(),
            sources.len()
        );
        truth
            .iter()
            .map(|(doc_id, entry)| {
                let predictions: Vec<(&str, &str)> = sources
                    .iter()
                    .map(|(name, corpus)| (*name, text_of(corpus, doc_id)))
                    .collect();
                self.evaluate_document(doc_id, entry.text(), &predictions)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DocumentEntry;

    #[test]
    fn test_truth_reused_across_sources() {
        let evaluator = Evaluator::new(EvalConfig::default());
        let report = evaluator.evaluate_document(
            "doc",
            "a b c d e",
            &[("one", "a b c d e"), ("two", "a b c d")],
        );

        assert_eq!(report.truth_tokens, 5);
        assert_eq!(report.sources.len(), 2);
        assert!((report.sources[0].overlap.recall - 1.0).abs() < 1e-9);
        assert!(report.sources[1].overlap.recall < 1.0);
    }

    #[test]
    fn test_missing_source_entry_scores_as_empty() {
        let mut truth = Corpus::new();
        truth.insert("doc-1".into(), DocumentEntry::new("a b c d e"));

        let predictions = Corpus::new(); // no entry for doc-1

        let evaluator = Evaluator::new(EvalConfig::default());
        let reports = evaluator.evaluate_corpus(&truth, &[("only", &predictions)]);

        assert_eq!(reports.len(), 1);
        let source = &reports[0].sources[0];
        assert_eq!(source.tokens, 0);
        assert_eq!(source.overlap.precision, 0.0);
        assert_eq!(source.overlap.recall, 0.0);
        assert_eq!(source.overlap.false_negatives, 2); // 5 tokens, n=4 -> 2 shingles
    }

    #[test]
    fn test_truth_defines_document_universe() {
        let mut truth = Corpus::new();
        truth.insert("known".into(), DocumentEntry::new("a b c d"));

        let mut predictions = Corpus::new();
        predictions.insert("known".into(), DocumentEntry::new("a b c d"));
        predictions.insert("extra".into(), DocumentEntry::new("x y z w"));

        let evaluator = Evaluator::new(EvalConfig::default());
        let reports = evaluator.evaluate_corpus(&truth, &[("src", &predictions)]);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].doc_id, "known");
    }

    #[test]
    fn test_reports_follow_lexicographic_id_order() {
        let mut truth = Corpus::new();
        for id in ["zeta", "alpha", "mid"] {
            truth.insert(id.into(), DocumentEntry::new("a b c d"));
        }

        let evaluator = Evaluator::new(EvalConfig::default());
        let reports = evaluator.evaluate_corpus(&truth, &[]);

        let ids: Vec<&str> = reports.iter().map(|r| r.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_empty_truth_text_preserves_recall_convention() {
        let evaluator = Evaluator::new(EvalConfig::default());
        let report = evaluator.evaluate_document("doc", "", &[("src", "x y z w")]);

        let overlap = &report.sources[0].overlap;
        assert_eq!(overlap.precision, 0.0);
        assert_eq!(overlap.recall, 1.0);
        assert_eq!(overlap.f1, 0.0);
    }
}
