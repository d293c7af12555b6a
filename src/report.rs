//! Report assembly and rendering.
//!
//! [`BenchReport`] gathers everything the run produced — the ranked worst
//! table, deficit category counts, boilerplate terms and the worst-document
//! excerpt dump — into one serializable structure with a human-readable
//! [`summary`](BenchReport::summary). [`FlatRecord`] is the flat per-document
//! row written to the results file.

use crate::boilerplate::{boilerplate_terms, TermCount};
use crate::config::EvalConfig;
use crate::corpus::{text_of, Corpus};
use crate::rank::{ComparisonRecord, DeficitBreakdown, GapMetric, ResultSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write as _;

/// One flat, serializable result row per document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatRecord {
    /// Document identifier.
    pub file: String,
    /// Candidate precision.
    pub candidate_precision: f64,
    /// Candidate recall.
    pub candidate_recall: f64,
    /// Candidate F1.
    pub candidate_f1: f64,
    /// Reference precision.
    pub reference_precision: f64,
    /// Reference recall.
    pub reference_recall: f64,
    /// Reference F1.
    pub reference_f1: f64,
    /// Reference-minus-candidate F1 gap.
    pub f1_gap: f64,
    /// Reference-minus-candidate precision gap.
    pub precision_gap: f64,
    /// Reference-minus-candidate recall gap.
    pub recall_gap: f64,
    /// Ground-truth token length.
    pub truth_tokens: usize,
    /// Candidate prediction token length.
    pub candidate_tokens: usize,
    /// Reference prediction token length.
    pub reference_tokens: usize,
}

impl From<&ComparisonRecord> for FlatRecord {
    fn from(record: &ComparisonRecord) -> Self {
        Self {
            file: record.doc_id.clone(),
            candidate_precision: record.candidate.overlap.precision,
            candidate_recall: record.candidate.overlap.recall,
            candidate_f1: record.candidate.overlap.f1,
            reference_precision: record.reference.overlap.precision,
            reference_recall: record.reference.overlap.recall,
            reference_f1: record.reference.overlap.f1,
            f1_gap: record.gap(GapMetric::F1),
            precision_gap: record.gap(GapMetric::Precision),
            recall_gap: record.gap(GapMetric::Recall),
            truth_tokens: record.truth_tokens,
            candidate_tokens: record.candidate.tokens,
            reference_tokens: record.reference.tokens,
        }
    }
}

/// Flat rows for every record in the set, in the set's current order.
#[must_use]
pub fn flat_records(set: &ResultSet) -> Vec<FlatRecord> {
    set.records.iter().map(FlatRecord::from).collect()
}

/// Excerpts of both competing outputs for the single worst document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorstSample {
    /// Document identifier.
    pub doc_id: String,
    /// Metrics row for the document.
    pub row: FlatRecord,
    /// First characters of the candidate output.
    pub candidate_excerpt: String,
    /// First characters of the reference output.
    pub reference_excerpt: String,
}

/// The assembled findings of one evaluation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchReport {
    /// Candidate source name.
    pub candidate: String,
    /// Reference source name.
    pub reference: String,
    /// Gap metric the set was ranked by.
    pub metric: GapMetric,
    /// Configuration the run used.
    pub config: EvalConfig,
    /// Number of documents evaluated.
    pub total_documents: usize,
    /// The worst-ranked documents (table rows).
    pub worst: Vec<FlatRecord>,
    /// Deficit categories over the full set.
    pub breakdown: DeficitBreakdown,
    /// Recurring extraneous candidate terms over the worst documents.
    pub boilerplate: Vec<TermCount>,
    /// Detail dump for the single worst document, if any documents exist.
    pub sample: Option<WorstSample>,
}

impl BenchReport {
    /// Assemble a report from an already ranked result set.
    ///
    /// `set` must have been sorted with [`ResultSet::rank_by`] using
    /// `metric`; the table, boilerplate pool and worst sample all read the
    /// set's current order.
    #[must_use]
    pub fn build(
        set: &ResultSet,
        metric: GapMetric,
        truth: &Corpus,
        candidate_corpus: &Corpus,
        reference_corpus: &Corpus,
        config: &EvalConfig,
    ) -> Self {
        let worst = set
            .top(config.worst_table_size)
            .iter()
            .map(FlatRecord::from)
            .collect();
        let breakdown = set.classify(config);
        let boilerplate = boilerplate_terms(
            set.top(config.boilerplate_doc_pool),
            truth,
            candidate_corpus,
            config,
        );

        let sample = set.records.first().map(|record| WorstSample {
            doc_id: record.doc_id.clone(),
            row: FlatRecord::from(record),
            candidate_excerpt: excerpt(
                text_of(candidate_corpus, &record.doc_id),
                config.sample_chars,
            ),
            reference_excerpt: excerpt(
                text_of(reference_corpus, &record.doc_id),
                config.sample_chars,
            ),
        });

        Self {
            candidate: set.candidate.clone(),
            reference: set.reference.clone(),
            metric,
            config: config.clone(),
            total_documents: set.records.len(),
            worst,
            breakdown,
            boilerplate,
            sample,
        }
    }

    /// Render the human-readable text report.
    #[must_use]
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let metric_name = match self.metric {
            GapMetric::F1 => "F1",
            GapMetric::Precision => "precision",
            GapMetric::Recall => "recall",
        };

        let _ = writeln!(
            out,
            "=== shingle-bench: {} vs {} ({} documents) ===\n",
            self.candidate, self.reference, self.total_documents
        );

        let _ = writeln!(out, "## Worst documents by {metric_name} gap");
        let _ = writeln!(
            out,
            "  {:<40} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "File", "Cand", "Ref", "Gap", "CandLen", "RefLen"
        );
        for row in &self.worst {
            let (cand, reference, gap) = match self.metric {
                GapMetric::F1 => (row.candidate_f1, row.reference_f1, row.f1_gap),
                GapMetric::Precision => {
                    (row.candidate_precision, row.reference_precision, row.precision_gap)
                }
                GapMetric::Recall => (row.candidate_recall, row.reference_recall, row.recall_gap),
            };
            let _ = writeln!(
                out,
                "  {:<40} {:>8.3} {:>8.3} {:>8.3} {:>8} {:>8}",
                row.file, cand, reference, gap, row.candidate_tokens, row.reference_tokens
            );
        }
        out.push('\n');

        let _ = writeln!(out, "## Summary");
        let _ = writeln!(out, "  Documents evaluated: {}", self.total_documents);
        let _ = writeln!(
            out,
            "  F1 gap > {:.2}: {}",
            self.config.deficit_threshold,
            self.breakdown.gap_above_threshold.len()
        );
        let _ = writeln!(
            out,
            "  Precision deficit > {:.2}: {}",
            self.config.deficit_threshold,
            self.breakdown.precision_deficit.len()
        );
        let _ = writeln!(
            out,
            "  Recall deficit > {:.2}: {}",
            self.config.deficit_threshold,
            self.breakdown.recall_deficit.len()
        );
        let _ = writeln!(
            out,
            "  Empty extraction: {}",
            self.breakdown.empty_extraction.len()
        );
        if !self.breakdown.empty_extraction.is_empty() {
            let shown: Vec<&str> = self
                .breakdown
                .empty_extraction
                .iter()
                .take(10)
                .map(String::as_str)
                .collect();
            let _ = writeln!(out, "    {}", shown.join(", "));
        }
        let _ = writeln!(
            out,
            "  Over-extraction (> {:.1}x reference): {}",
            self.config.over_extraction_factor,
            self.breakdown.over_extraction.len()
        );
        out.push('\n');

        if !self.boilerplate.is_empty() {
            let _ = writeln!(
                out,
                "## Boilerplate terms (worst {} documents)",
                self.config.boilerplate_doc_pool
            );
            for (term, count) in &self.boilerplate {
                let _ = writeln!(out, "  {term}: {count}");
            }
            out.push('\n');
        }

        if let Some(sample) = &self.sample {
            let _ = writeln!(out, "## Worst document");
            let _ = writeln!(out, "  File: {}", sample.doc_id);
            let _ = writeln!(
                out,
                "  {}: P={:.3} R={:.3} F1={:.3} ({} tokens)",
                self.candidate,
                sample.row.candidate_precision,
                sample.row.candidate_recall,
                sample.row.candidate_f1,
                sample.row.candidate_tokens
            );
            let _ = writeln!(
                out,
                "  {}: P={:.3} R={:.3} F1={:.3} ({} tokens)",
                self.reference,
                sample.row.reference_precision,
                sample.row.reference_recall,
                sample.row.reference_f1,
                sample.row.reference_tokens
            );
            let _ = writeln!(out, "  Truth: {} tokens", sample.row.truth_tokens);
            let _ = writeln!(
                out,
                "\n  {} first {} chars:\n{}",
                self.candidate, self.config.sample_chars, sample.candidate_excerpt
            );
            let _ = writeln!(
                out,
                "\n  {} first {} chars:\n{}",
                self.reference, self.config.sample_chars, sample.reference_excerpt
            );
        }

        out
    }
}

impl fmt::Display for BenchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}

/// First `chars` characters of `text`, on character boundaries.
fn excerpt(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}
