//! Invariant tests for the shingle overlap engine.
//!
//! These verify that scoring always satisfies its mathematical and
//! degenerate-input contracts, regardless of input text, and that the
//! document universe and ranking behave as documented.

use shingle_bench::{
    load_corpus, DocumentEntry, EvalConfig, Evaluator, GapMetric, OverlapStrategy, ResultSet,
    Shingles, TokenStrategy,
};
use std::collections::BTreeMap;

fn evaluate_pair(truth: &str, pred: &str, config: EvalConfig) -> shingle_bench::Overlap {
    let evaluator = Evaluator::new(config);
    let report = evaluator.evaluate_document("doc", truth, &[("src", pred)]);
    report.sources[0].overlap
}

#[test]
fn test_metrics_always_bounded() {
    let cases = [
        ("", ""),
        ("", "x y z w"),
        ("a b c d e", ""),
        ("a b c d e", "a b c d e"),
        ("a b c d e", "f g h i j"),
        ("short", "also short"),
        ("repeat repeat repeat repeat repeat", "repeat repeat"),
    ];
    for strategy in [OverlapStrategy::Set, OverlapStrategy::Multiset] {
        for (truth, pred) in cases {
            let config = EvalConfig::default().with_overlap_strategy(strategy);
            let overlap = evaluate_pair(truth, pred, config);
            for (name, value) in [
                ("precision", overlap.precision),
                ("recall", overlap.recall),
                ("f1", overlap.f1),
            ] {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{name} out of [0,1] for truth={truth:?} pred={pred:?}: {value}"
                );
            }
        }
    }
}

#[test]
fn test_empty_prediction_is_never_rewarded() {
    for truth in ["", "a b c d e"] {
        let overlap = evaluate_pair(truth, "", EvalConfig::default());
        assert_eq!(overlap.precision, 0.0, "truth={truth:?}");
        assert_eq!(overlap.recall, 0.0, "truth={truth:?}");
        assert_eq!(overlap.f1, 0.0, "truth={truth:?}");
    }
}

#[test]
fn test_empty_truth_recall_convention() {
    let overlap = evaluate_pair("", "x y z w", EvalConfig::default());
    assert_eq!(overlap.precision, 0.0);
    assert_eq!(overlap.recall, 1.0);
    assert_eq!(overlap.f1, 0.0);
}

#[test]
fn test_identical_texts_score_perfectly() {
    let text = "The quick brown fox jumps over the lazy dog near the river bank";
    for strategy in [OverlapStrategy::Set, OverlapStrategy::Multiset] {
        let config = EvalConfig::default().with_overlap_strategy(strategy);
        let overlap = evaluate_pair(text, text, config);
        assert_eq!(overlap.false_positives, 0);
        assert_eq!(overlap.false_negatives, 0);
        assert!((overlap.precision - 1.0).abs() < 1e-9);
        assert!((overlap.recall - 1.0).abs() < 1e-9);
        assert!((overlap.f1 - 1.0).abs() < 1e-9);
    }
}

#[test]
fn test_cat_sat_example() {
    // truth = prediction = "the cat sat on the mat", n=4: 3 shingles each side.
    let overlap = evaluate_pair(
        "the cat sat on the mat",
        "the cat sat on the mat",
        EvalConfig::default(),
    );
    assert_eq!(overlap.true_positives, 3);
    assert_eq!(overlap.false_positives, 0);
    assert_eq!(overlap.false_negatives, 0);
    assert!((overlap.f1 - 1.0).abs() < 1e-9);
}

#[test]
fn test_empty_prediction_example_lengths() {
    let evaluator = Evaluator::new(EvalConfig::default());
    let report = evaluator.evaluate_document("doc", "a b c d e", &[("src", "")]);
    assert_eq!(report.truth_tokens, 5);
    assert_eq!(report.sources[0].tokens, 0);
    assert_eq!(report.sources[0].overlap.f1, 0.0);
}

#[test]
fn test_tp_bounded_by_smaller_collection() {
    let config = EvalConfig::default();
    let strategy = config.token_strategy;
    let truth_text = "a b a b a b a b";
    let pred_text = "a b a b";

    let truth_tokens = strategy.tokenize(truth_text);
    let pred_tokens = strategy.tokenize(pred_text);
    let truth = Shingles::build(&truth_tokens, 4, OverlapStrategy::Multiset);
    let pred = Shingles::build(&pred_tokens, 4, OverlapStrategy::Multiset);

    let overlap = shingle_bench::score(&truth, &pred);
    assert!(overlap.true_positives <= truth.total().min(pred.total()));
    assert_eq!(overlap.true_positives + overlap.false_positives, pred.total());
    assert_eq!(overlap.true_positives + overlap.false_negatives, truth.total());
}

#[test]
fn test_prediction_only_documents_excluded() {
    let mut truth = BTreeMap::new();
    truth.insert("in-truth".to_string(), DocumentEntry::new("a b c d"));

    let mut pred = BTreeMap::new();
    pred.insert("in-truth".to_string(), DocumentEntry::new("a b c d"));
    pred.insert("pred-only".to_string(), DocumentEntry::new("x y z w"));

    let evaluator = Evaluator::new(EvalConfig::default());
    let reports = evaluator.evaluate_corpus(&truth, &[("src", &pred)]);
    let set = ResultSet::from_reports(&reports, "src", "src");

    assert_eq!(set.records.len(), 1);
    assert!(set.records.iter().all(|r| r.doc_id != "pred-only"));
}

#[test]
fn test_both_tokenizers_are_total() {
    for strategy in [TokenStrategy::Whitespace, TokenStrategy::WordChars] {
        for text in ["", "   ", "...", "ünïcödé täxt!", "tab\tand\nnewline"] {
            let tokens = strategy.tokenize(text);
            assert!(tokens.iter().all(|t| !t.is_empty()));
        }
    }
}

#[test]
fn test_full_pipeline_from_files() {
    let dir = std::env::temp_dir().join("shingle_bench_invariants");
    std::fs::create_dir_all(&dir).unwrap();

    let truth_path = dir.join("ground-truth.json");
    let cand_path = dir.join("candidate.json");
    let ref_path = dir.join("reference.json");

    std::fs::write(
        &truth_path,
        r#"{"doc-1": {"articleBody": "the cat sat on the mat"},
            "doc-2": {"articleBody": "another article body text here"}}"#,
    )
    .unwrap();
    std::fs::write(
        &cand_path,
        r#"{"doc-1": {"articleBody": "the cat sat on the mat"}}"#,
    )
    .unwrap();
    std::fs::write(
        &ref_path,
        r#"{"doc-1": {"articleBody": "the cat sat on the mat"},
            "doc-2": {"articleBody": "another article body text here"}}"#,
    )
    .unwrap();

    let truth = load_corpus(&truth_path).unwrap();
    let cand = load_corpus(&cand_path).unwrap();
    let reference = load_corpus(&ref_path).unwrap();

    let config = EvalConfig::default();
    let evaluator = Evaluator::new(config.clone());
    let reports = evaluator.evaluate_corpus(&truth, &[("cand", &cand), ("ref", &reference)]);
    let mut set = ResultSet::from_reports(&reports, "cand", "ref");
    set.rank_by(GapMetric::F1);

    // doc-2 is missing from the candidate: empty prediction, worst rank.
    assert_eq!(set.records.len(), 2);
    assert_eq!(set.records[0].doc_id, "doc-2");
    assert_eq!(set.records[0].candidate.tokens, 0);
    assert!((set.records[0].gap(GapMetric::F1) - 1.0).abs() < 1e-9);

    let breakdown = set.classify(&config);
    assert_eq!(breakdown.empty_extraction, vec!["doc-2"]);
}
