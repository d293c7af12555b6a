//! Boilerplate detection via token-level set difference.
//!
//! Over the worst-ranked documents, every token the candidate predicted that
//! does not occur anywhere in that document's ground truth is collected and
//! counted across documents. Tokens that recur are a proxy for extraction
//! noise the candidate keeps dragging in: navigation text, ads, footers,
//! cookie banners.
//!
//! The difference is taken on tokens, not shingles, so a recurring
//! navigation word is counted even when its surrounding n-grams differ per
//! page. Multiplicity within a document is preserved: a word printed on
//! every menu row counts once per occurrence.

use crate::config::EvalConfig;
use crate::corpus::{text_of, Corpus};
use crate::rank::ComparisonRecord;
use std::collections::{HashMap, HashSet};

/// A recurring extraneous term with its occurrence count.
pub type TermCount = (String, usize);

/// Collect the most frequent extraneous candidate tokens over the given
/// (already ranked) records.
///
/// Only terms longer than `config.min_term_chars` characters are surfaced;
/// ties order alphabetically so the list is reproducible. At most
/// `config.boilerplate_term_count` terms are returned.
#[must_use]
pub fn boilerplate_terms(
    worst: &[ComparisonRecord],
    truth: &Corpus,
    candidate: &Corpus,
    config: &EvalConfig,
) -> Vec<TermCount> {
    let strategy = config.token_strategy;
    let mut counts: HashMap<String, usize> = HashMap::new();

    for record in worst {
        let truth_tokens: HashSet<String> =
            strategy.tokenize(text_of(truth, &record.doc_id)).into_iter().collect();
        for token in strategy.tokenize(text_of(candidate, &record.doc_id)) {
            if !truth_tokens.contains(&token) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
    }

    let mut terms: Vec<TermCount> = counts
        .into_iter()
        .filter(|(term, _)| term.chars().count() > config.min_term_chars)
        .collect();
    terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    terms.truncate(config.boilerplate_term_count);
    terms
}
