//! # shingle-bench
//!
//! Benchmarks automatically extracted article text against human-curated
//! ground truth for two competing extractor implementations, using n-gram
//! "shingle" overlap instead of exact string equality.
//!
//! The pipeline per document is tokenize → shingle → score: texts are
//! case-normalized into word tokens, grouped into overlapping n-token
//! shingles (default n = 4), and the predicted shingle collection is scored
//! against the truth's for true-positive/false-positive/false-negative
//! counts and derived precision, recall and F1. On top of that sit ranking
//! by candidate-versus-reference gap, deficit classification and
//! boilerplate-term detection, rendered as a report that points at the
//! documents where one extractor systematically diverges.
//!
//! ## Quick start
//!
//! ```rust
//! use shingle_bench::{BenchReport, DocumentEntry, EvalConfig, Evaluator, GapMetric, ResultSet};
//! use std::collections::BTreeMap;
//!
//! let mut truth = BTreeMap::new();
//! truth.insert("doc-1".to_string(), DocumentEntry::new("the cat sat on the mat"));
//!
//! let mut ours = BTreeMap::new();
//! ours.insert("doc-1".to_string(), DocumentEntry::new("the cat sat on the mat today"));
//!
//! let mut theirs = BTreeMap::new();
//! theirs.insert("doc-1".to_string(), DocumentEntry::new("the cat sat on the mat"));
//!
//! let config = EvalConfig::default();
//! let evaluator = Evaluator::new(config.clone());
//! let reports = evaluator.evaluate_corpus(&truth, &[("ours", &ours), ("theirs", &theirs)]);
//!
//! let mut results = ResultSet::from_reports(&reports, "ours", "theirs");
//! results.rank_by(GapMetric::F1);
//!
//! let report = BenchReport::build(&results, GapMetric::F1, &truth, &ours, &theirs, &config);
//! println!("{report}");
//! ```
//!
//! ## Design notes
//!
//! - Scoring is total: empty or absent texts always produce a defined
//!   record, never an error. The degenerate-input conventions (including
//!   recall = 1 against an empty truth) are part of the contract; see
//!   [`score`](score::score).
//! - Set and multiset shingle comparison are two distinct strategies behind
//!   one scorer. Results are not comparable across strategies; multiset is
//!   the default. See [`OverlapStrategy`].
//! - The ground truth defines the document universe, iterated in
//!   lexicographic id order for reproducible output.

#![warn(missing_docs)]

pub mod boilerplate;
pub mod config;
pub mod corpus;
mod error;
pub mod evaluate;
pub mod rank;
pub mod report;
pub mod score;
pub mod shingle;
pub mod tokenize;

pub use boilerplate::{boilerplate_terms, TermCount};
pub use config::EvalConfig;
pub use corpus::{load_corpus, text_of, Corpus, DocumentEntry};
pub use error::{Error, Result};
pub use evaluate::{DocumentReport, Evaluator, SourceScore};
pub use rank::{ComparisonRecord, DeficitBreakdown, GapMetric, ResultSet};
pub use report::{flat_records, BenchReport, FlatRecord, WorstSample};
pub use score::{score, Overlap};
pub use shingle::{OverlapStrategy, Shingle, Shingles};
pub use tokenize::TokenStrategy;
