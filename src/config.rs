//! Evaluation configuration.
//!
//! Every tunable the engine reads lives here with its documented default:
//! the shingle size, the overlap and tokenizer strategies, the deficit
//! thresholds, and the report sizes. Nothing is read from globals or the
//! environment; callers pass an [`EvalConfig`] down explicitly.

use crate::shingle::OverlapStrategy;
use crate::tokenize::TokenStrategy;
use serde::{Deserialize, Serialize};

/// Configuration for one evaluation run.
///
/// # Example
///
/// ```rust
/// use shingle_bench::{EvalConfig, OverlapStrategy};
///
/// let config = EvalConfig::default()
///     .with_ngram_size(3)
///     .with_overlap_strategy(OverlapStrategy::Set);
/// assert_eq!(config.ngram_size, 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    /// Shingle size in tokens (default 4).
    pub ngram_size: usize,
    /// Shingle collection representation used for scoring (default multiset).
    pub overlap_strategy: OverlapStrategy,
    /// Tokenization strategy (default whitespace collapse).
    pub token_strategy: TokenStrategy,
    /// Absolute precision/recall gap above which a document counts as a
    /// deficit for the candidate (default 0.1).
    pub deficit_threshold: f64,
    /// Length factor above which the candidate counts as over-extracting
    /// relative to the reference (default 2.0).
    pub over_extraction_factor: f64,
    /// Minimum reference token length for the over-extraction check, so tiny
    /// documents do not trip the ratio (default 100).
    pub min_comparison_tokens: usize,
    /// Rows in the ranked worst-documents table (default 10).
    pub worst_table_size: usize,
    /// Worst documents pooled for boilerplate detection (default 20).
    pub boilerplate_doc_pool: usize,
    /// Boilerplate terms listed in the report (default 30).
    pub boilerplate_term_count: usize,
    /// Terms this short are ignored by boilerplate detection (default 2,
    /// i.e. only terms longer than 2 characters are surfaced).
    pub min_term_chars: usize,
    /// Characters of each competing output dumped for the worst document
    /// (default 800).
    pub sample_chars: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            ngram_size: 4,
            overlap_strategy: OverlapStrategy::Multiset,
            token_strategy: TokenStrategy::Whitespace,
            deficit_threshold: 0.1,
            over_extraction_factor: 2.0,
            min_comparison_tokens: 100,
            worst_table_size: 10,
            boilerplate_doc_pool: 20,
            boilerplate_term_count: 30,
            min_term_chars: 2,
            sample_chars: 800,
        }
    }
}

impl EvalConfig {
    /// Set the shingle size. A size of 0 is clamped to 1.
    pub fn with_ngram_size(mut self, n: usize) -> Self {
        self.ngram_size = n.max(1);
        self
    }

    /// Set the overlap strategy.
    pub fn with_overlap_strategy(mut self, strategy: OverlapStrategy) -> Self {
        self.overlap_strategy = strategy;
        self
    }

    /// Set the tokenization strategy.
    pub fn with_token_strategy(mut self, strategy: TokenStrategy) -> Self {
        self.token_strategy = strategy;
        self
    }

    /// Set the precision/recall deficit threshold.
    pub fn with_deficit_threshold(mut self, threshold: f64) -> Self {
        self.deficit_threshold = threshold;
        self
    }

    /// Set the over-extraction length factor.
    pub fn with_over_extraction_factor(mut self, factor: f64) -> Self {
        self.over_extraction_factor = factor;
        self
    }

    /// Set the ranked-table row count.
    pub fn with_worst_table_size(mut self, size: usize) -> Self {
        self.worst_table_size = size;
        self
    }
}
