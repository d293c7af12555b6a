//! CLI for benchmarking two extractor outputs against ground truth.
//!
//! Usage:
//!   shingle_bench --ground-truth ground-truth.json \
//!       --candidate rs=output/rs.json \
//!       --reference go=output/go.json \
//!       [--ngram 4] [--strategy multiset] [--tokenizer whitespace] \
//!       [--rank-by f1] [--top 10] [--out results.json]
//!
//! Prints the ranked report to stdout; `--out` additionally writes the flat
//! per-document result rows as JSON.

use clap::{Parser, ValueEnum};
use shingle_bench::{
    flat_records, load_corpus, BenchReport, Error, EvalConfig, Evaluator, GapMetric,
    OverlapStrategy, ResultSet, TokenStrategy,
};
use std::fs;
use std::path::PathBuf;
use std::process;

/// Compare two article-text extractors against a ground-truth corpus.
#[derive(Parser)]
#[command(name = "shingle_bench", version, about)]
struct Cli {
    /// Ground-truth corpus JSON (id -> { "articleBody": ... })
    #[arg(long)]
    ground_truth: PathBuf,

    /// Candidate extractor output as NAME=PATH (the system under inspection)
    #[arg(long)]
    candidate: String,

    /// Reference extractor output as NAME=PATH (the system compared against)
    #[arg(long)]
    reference: String,

    /// Shingle size in tokens
    #[arg(long, default_value_t = 4)]
    ngram: usize,

    /// Shingle collection representation
    #[arg(long, value_enum, default_value_t = StrategyArg::Multiset)]
    strategy: StrategyArg,

    /// Tokenization strategy
    #[arg(long, value_enum, default_value_t = TokenizerArg::Whitespace)]
    tokenizer: TokenizerArg,

    /// Gap metric the worst-documents ranking uses
    #[arg(long, value_enum, default_value_t = MetricArg::F1)]
    rank_by: MetricArg,

    /// Rows in the ranked worst-documents table
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Write flat per-document result rows as JSON to this path
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Set,
    Multiset,
}

#[derive(Clone, Copy, ValueEnum)]
enum TokenizerArg {
    Whitespace,
    WordChars,
}

#[derive(Clone, Copy, ValueEnum)]
enum MetricArg {
    F1,
    Precision,
    Recall,
}

fn parse_named_source(arg: &str) -> shingle_bench::Result<(String, PathBuf)> {
    match arg.split_once('=') {
        Some((name, path)) if !name.is_empty() && !path.is_empty() => {
            Ok((name.to_string(), PathBuf::from(path)))
        }
        _ => Err(Error::invalid_config(format!(
            "expected NAME=PATH, got '{arg}'"
        ))),
    }
}

fn run(cli: &Cli) -> shingle_bench::Result<()> {
    let (candidate_name, candidate_path) = parse_named_source(&cli.candidate)?;
    let (reference_name, reference_path) = parse_named_source(&cli.reference)?;

    let config = EvalConfig::default()
        .with_ngram_size(cli.ngram)
        .with_overlap_strategy(match cli.strategy {
            StrategyArg::Set => OverlapStrategy::Set,
            StrategyArg::Multiset => OverlapStrategy::Multiset,
        })
        .with_token_strategy(match cli.tokenizer {
            TokenizerArg::Whitespace => TokenStrategy::Whitespace,
            TokenizerArg::WordChars => TokenStrategy::WordChars,
        })
        .with_worst_table_size(cli.top);
    let metric = match cli.rank_by {
        MetricArg::F1 => GapMetric::F1,
        MetricArg::Precision => GapMetric::Precision,
        MetricArg::Recall => GapMetric::Recall,
    };

    let truth = load_corpus(&cli.ground_truth)?;
    let candidate_corpus = load_corpus(&candidate_path)?;
    let reference_corpus = load_corpus(&reference_path)?;

    let evaluator = Evaluator::new(config.clone());
    let reports = evaluator.evaluate_corpus(
        &truth,
        &[
            (candidate_name.as_str(), &candidate_corpus),
            (reference_name.as_str(), &reference_corpus),
        ],
    );

    let mut results = ResultSet::from_reports(&reports, &candidate_name, &reference_name);
    results.rank_by(metric);

    let report = BenchReport::build(
        &results,
        metric,
        &truth,
        &candidate_corpus,
        &reference_corpus,
        &config,
    );
    println!("{report}");

    if let Some(out_path) = &cli.out {
        let rows = flat_records(&results);
        fs::write(out_path, serde_json::to_string_pretty(&rows)?)?;
        println!("Results written to {}", out_path.display());
    }

    Ok(())
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
