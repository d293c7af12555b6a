//! Result set: pairing, ranking and deficit classification.
//!
//! Per-document reports are paired into [`ComparisonRecord`]s for one
//! candidate source (the system under inspection) and one reference source
//! (the system it is measured against). The result set can then be ranked
//! by a gap metric and partitioned into deficit categories.
//!
//! The gap is always reference minus candidate, so a positive gap means the
//! candidate underperforms and sorting descending puts its worst documents
//! first.

use crate::config::EvalConfig;
use crate::evaluate::{DocumentReport, SourceScore};
use crate::score::Overlap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Which per-source metric the ranking gap is computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapMetric {
    /// Gap between F1 scores (default).
    F1,
    /// Gap between precisions.
    Precision,
    /// Gap between recalls.
    Recall,
}

/// One document's candidate-versus-reference comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    /// Document identifier.
    pub doc_id: String,
    /// Token length of the ground-truth text.
    pub truth_tokens: usize,
    /// Score of the candidate source.
    pub candidate: SourceScore,
    /// Score of the reference source.
    pub reference: SourceScore,
}

impl ComparisonRecord {
    /// Reference-minus-candidate gap for the given metric. Positive when
    /// the candidate underperforms.
    #[must_use]
    pub fn gap(&self, metric: GapMetric) -> f64 {
        let pick = |o: &Overlap| match metric {
            GapMetric::F1 => o.f1,
            GapMetric::Precision => o.precision,
            GapMetric::Recall => o.recall,
        };
        pick(&self.reference.overlap) - pick(&self.candidate.overlap)
    }
}

/// Which deficit categories one record falls into. A record can be in
/// several at once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeficitBreakdown {
    /// Documents where the candidate's F1 trails the reference's by more
    /// than the deficit threshold.
    pub gap_above_threshold: Vec<String>,
    /// Documents where the candidate's precision trails the reference's by
    /// more than the deficit threshold.
    pub precision_deficit: Vec<String>,
    /// Documents where the candidate's recall trails the reference's by
    /// more than the deficit threshold.
    pub recall_deficit: Vec<String>,
    /// Documents where the candidate extracted nothing although the truth
    /// is non-empty.
    pub empty_extraction: Vec<String>,
    /// Documents where the candidate's output is more than the configured
    /// factor longer than the reference's (reference long enough to make
    /// the ratio meaningful).
    pub over_extraction: Vec<String>,
}

/// The full result set of one evaluation run for a (candidate, reference)
/// pair: one record per ground-truth document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    /// Candidate source name.
    pub candidate: String,
    /// Reference source name.
    pub reference: String,
    /// One record per document, in whatever order the set currently holds
    /// (construction order until [`ResultSet::rank_by`] is called).
    pub records: Vec<ComparisonRecord>,
}

impl ResultSet {
    /// Pair per-document reports into comparison records for the named
    /// candidate and reference sources.
    ///
    /// A report missing one of the sources contributes an empty-prediction
    /// score for it, keeping one record per document unconditionally.
    #[must_use]
    pub fn from_reports(reports: &[DocumentReport], candidate: &str, reference: &str) -> Self {
        let records = reports
            .iter()
            .map(|report| ComparisonRecord {
                doc_id: report.doc_id.clone(),
                truth_tokens: report.truth_tokens,
                candidate: pick_source(report, candidate),
                reference: pick_source(report, reference),
            })
            .collect();
        Self {
            candidate: candidate.to_string(),
            reference: reference.to_string(),
            records,
        }
    }

    /// Sort records by descending gap, worst candidate documents first.
    ///
    /// Ties order by document id ascending, making the ranking a stable
    /// total order: re-sorting an unchanged set never reorders it.
    pub fn rank_by(&mut self, metric: GapMetric) {
        self.records.sort_by(|a, b| {
            match b.gap(metric).total_cmp(&a.gap(metric)) {
                Ordering::Equal => a.doc_id.cmp(&b.doc_id),
                other => other,
            }
        });
    }

    /// The first `k` records in the current order.
    #[must_use]
    pub fn top(&self, k: usize) -> &[ComparisonRecord] {
        &self.records[..k.min(self.records.len())]
    }

    /// Partition records into deficit categories.
    #[must_use]
    pub fn classify(&self, config: &EvalConfig) -> DeficitBreakdown {
        let mut breakdown = DeficitBreakdown::default();
        let threshold = config.deficit_threshold;

        for record in &self.records {
            let cand = &record.candidate.overlap;
            let reference = &record.reference.overlap;

            if reference.f1 - cand.f1 > threshold {
                breakdown.gap_above_threshold.push(record.doc_id.clone());
            }
            if reference.precision - cand.precision > threshold {
                breakdown.precision_deficit.push(record.doc_id.clone());
            }
            if reference.recall - cand.recall > threshold {
                breakdown.recall_deficit.push(record.doc_id.clone());
            }
            if record.candidate.tokens == 0 && record.truth_tokens > 0 {
                breakdown.empty_extraction.push(record.doc_id.clone());
            }
            let reference_long_enough = record.reference.tokens > config.min_comparison_tokens;
            if reference_long_enough
                && record.candidate.tokens as f64
                    > record.reference.tokens as f64 * config.over_extraction_factor
            {
                breakdown.over_extraction.push(record.doc_id.clone());
            }
        }

        breakdown
    }
}

fn pick_source(report: &DocumentReport, name: &str) -> SourceScore {
    report.source(name).cloned().unwrap_or(SourceScore {
        source: name.to_string(),
        tokens: 0,
        overlap: Overlap::default(),
    })
}
