use anyhow::{Context, Result};
use tracing::{info, info_span};

use std::path::PathBuf;

use senti_ingest::{
    IngestOptions, MalformedRowMode, build_column_hints, list_csv_files, read_table,
    suggest_text_columns,
};
use senti_lexicon::SentimentModel;
use senti_model::StarRating;
use senti_report::{AnalysisReport, write_analysis_report};

use crate::cli::{AnalyzeArgs, ColumnsArgs, DistributionArgs, PreviewArgs, ScoreArgs};
use crate::pipeline::{FileOutcome, process_file};
use crate::summary::{
    print_columns_table, print_distribution_table, print_preview_table, print_score_table,
};
use crate::types::{AnalyzeRunResult, FileSummary, ScoredText};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<AnalyzeRunResult> {
    let model = SentimentModel::load().context("load sentiment model")?;
    let policy = args.policy.into_policy();
    let inputs = expand_inputs(&args.inputs)?;
    let options = IngestOptions {
        malformed: malformed_mode(args, inputs.len()),
    };

    let run_span = info_span!("analyze_run", file_count = inputs.len(), policy = %policy);
    let _guard = run_span.enter();

    let mut files = Vec::new();
    let mut errors = Vec::new();
    let mut report_paths = Vec::new();

    // Files are processed sequentially in argument order; a failing file is
    // reported and the rest still run.
    for path in &inputs {
        let outcome = match process_file(path, &model, &args.column, policy, &options) {
            Ok(outcome) => outcome,
            Err(error) => {
                errors.push(format!("{error:#}"));
                continue;
            }
        };
        if let Some(dir) = &args.report_dir {
            let report = AnalysisReport::from_analysis(&outcome.analysis);
            match write_analysis_report(dir, &report) {
                Ok(path) => report_paths.push(path),
                Err(error) => errors.push(format!("{}: {error:#}", outcome.path.display())),
            }
        }
        files.push(file_summary(outcome));
    }

    info!(
        file_count = files.len(),
        error_count = errors.len(),
        "analyze run complete"
    );

    let has_errors = !errors.is_empty();
    Ok(AnalyzeRunResult {
        files,
        errors,
        report_paths,
        has_errors,
    })
}

/// Directories expand to their CSV files (sorted by name); plain paths pass
/// through in argument order.
fn expand_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut expanded = Vec::new();
    for path in inputs {
        if path.is_dir() {
            let found = list_csv_files(path)
                .with_context(|| format!("discover csv files in {}", path.display()))?;
            if found.is_empty() {
                anyhow::bail!("no csv files found in {}", path.display());
            }
            expanded.extend(found);
        } else {
            expanded.push(path.clone());
        }
    }
    Ok(expanded)
}

/// Strict for a single input file, lenient across several, unless overridden.
fn malformed_mode(args: &AnalyzeArgs, input_count: usize) -> MalformedRowMode {
    if args.lenient {
        MalformedRowMode::Skip
    } else if args.strict || input_count == 1 {
        MalformedRowMode::Fail
    } else {
        MalformedRowMode::Skip
    }
}

fn file_summary(outcome: FileOutcome) -> FileSummary {
    FileSummary {
        source: outcome.path.display().to_string(),
        encoding: outcome.encoding.as_str(),
        total_rows: outcome.total_rows,
        scored: outcome.analysis.scored_count(),
        skipped_missing: outcome.analysis.skipped_records,
        skipped_malformed: outcome.skipped_rows.len(),
        breakdown: outcome.analysis.breakdown,
        stars: outcome.analysis.stars,
        stats: outcome.analysis.stats,
        row_errors: outcome.skipped_rows,
    }
}

pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let report = read_table(&args.input, &IngestOptions::lenient())
        .with_context(|| format!("read {}", args.input.display()))?;
    let hints = build_column_hints(&report.table);
    let suggested = suggest_text_columns(&report.table, &hints);
    print_columns_table(&report.table, &hints, &suggested);
    Ok(())
}

pub fn run_distribution(args: &DistributionArgs) -> Result<()> {
    let report = read_table(&args.input, &IngestOptions::lenient())
        .with_context(|| format!("read {}", args.input.display()))?;
    let counts = match senti_core::column_value_counts(&report.table, &args.column) {
        Ok(counts) => counts,
        Err(senti_core::CoreError::UnknownColumn { column }) => anyhow::bail!(
            "column {:?} not found in {}; available columns: {}",
            column,
            args.input.display(),
            report.table.headers.join(", ")
        ),
    };
    print_distribution_table(&args.column, &counts);
    Ok(())
}

pub fn run_preview(args: &PreviewArgs) -> Result<()> {
    let report = read_table(&args.input, &IngestOptions::lenient())
        .with_context(|| format!("read {}", args.input.display()))?;
    print_preview_table(&report.table, args.rows);
    Ok(())
}

pub fn run_score(args: &ScoreArgs) -> Result<()> {
    let model = SentimentModel::load().context("load sentiment model")?;
    let policy = args.policy.into_policy();

    let scored: Vec<ScoredText> = args
        .texts
        .iter()
        .map(|text| {
            let scores = model.analyze(text);
            ScoredText {
                text: text.clone(),
                scores,
                category: policy.classify(scores.compound),
                stars: StarRating::from_score(scores.compound),
            }
        })
        .collect();

    print_score_table(&scored, policy);
    Ok(())
}
