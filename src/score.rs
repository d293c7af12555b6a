//! Overlap scoring: tp/fp/fn counts and precision/recall/F1.
//!
//! One algorithm covers both collection representations: for every distinct
//! shingle key in either collection, tp accumulates `min(truth, pred)`
//! occurrence counts, fp accumulates the predicted surplus and fn the truth
//! surplus. Under the set representation every count is 0 or 1 and this
//! reduces to the plain set cardinalities |truth ∩ pred|, |pred − truth|,
//! |truth − pred|.
//!
//! # Degenerate inputs
//!
//! Scoring is total; the fallbacks are part of the contract and downstream
//! ranking depends on them:
//!
//! - Empty prediction: precision = recall = f1 = 0, even against an empty
//!   truth. Predicting nothing is never rewarded.
//! - Empty truth, non-empty prediction: precision = 0, **recall = 1**,
//!   f1 = 0. Recall is vacuously complete against an empty target. The
//!   convention is asymmetric and deliberate; do not "fix" it.

use crate::shingle::Shingles;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Overlap counts and derived metrics for one (truth, prediction) pair.
///
/// Invariants: `true_positives + false_positives` equals the total predicted
/// shingles and `true_positives + false_negatives` the total truth shingles,
/// in whichever representation was scored; precision, recall and f1 are
/// always in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Overlap {
    /// Shingle occurrences present in both collections.
    pub true_positives: usize,
    /// Predicted occurrences absent from the truth.
    pub false_positives: usize,
    /// Truth occurrences missing from the prediction.
    pub false_negatives: usize,
    /// Fraction of predicted shingles that occur in the truth.
    pub precision: f64,
    /// Fraction of truth shingles recovered by the prediction.
    pub recall: f64,
    /// Harmonic mean of precision and recall.
    pub f1: f64,
}

impl Default for Overlap {
    /// The all-zero record an empty prediction against an empty truth gets.
    fn default() -> Self {
        Self {
            true_positives: 0,
            false_positives: 0,
            false_negatives: 0,
            precision: 0.0,
            recall: 0.0,
            f1: 0.0,
        }
    }
}

/// Score a predicted shingle collection against the ground truth.
///
/// Total over every input combination; see the module docs for the
/// degenerate-input policy.
#[must_use]
pub fn score(truth: &Shingles, pred: &Shingles) -> Overlap {
    if pred.is_empty() {
        // Predicting nothing is never rewarded, even against empty truth.
        return Overlap {
            false_negatives: truth.total(),
            ..Overlap::default()
        };
    }
    if truth.is_empty() {
        // Vacuously complete recall against an empty target.
        return Overlap {
            false_positives: pred.total(),
            recall: 1.0,
            ..Overlap::default()
        };
    }

    let mut tp = 0usize;
    let mut fp = 0usize;
    let mut fn_count = 0usize;

    let keys: HashSet<&Vec<String>> = truth.keys().chain(pred.keys()).collect();
    for key in keys {
        let truth_count = truth.count(key);
        let pred_count = pred.count(key);
        tp += truth_count.min(pred_count);
        fp += pred_count.saturating_sub(truth_count);
        fn_count += truth_count.saturating_sub(pred_count);
    }

    let precision = ratio(tp, tp + fp);
    let recall = ratio(tp, tp + fn_count);
    let f1 = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    Overlap {
        true_positives: tp,
        false_positives: fp,
        false_negatives: fn_count,
        precision,
        recall,
        f1,
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator > 0 {
        numerator as f64 / denominator as f64
    } else {
        0.0
    }
}
