//! Per-file analysis pipeline with explicit stages.
//!
//! Each input file passes through:
//! 1. **Ingest**: read and decode the CSV into a table
//! 2. **Analyze**: score the selected column, classify, aggregate
//!
//! The caller decides how malformed records are treated (strict for a single
//! input, lenient across several) and what to do with the outcome.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{debug, info_span};

use senti_core::{AnalysisRequest, AnalysisResult, CoreError, analyze_table};
use senti_ingest::{IngestOptions, RowError, TextEncoding, read_table};
use senti_model::{Scorer, ThresholdPolicy};

/// Result of processing a single CSV file.
#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub encoding: TextEncoding,
    /// Rows ingested from the file (excluding skipped records).
    pub total_rows: usize,
    /// Malformed records skipped during a lenient ingest.
    pub skipped_rows: Vec<RowError>,
    pub analysis: AnalysisResult,
}

/// Ingest one file and run the analysis pipeline over it.
pub fn process_file(
    path: &Path,
    scorer: &dyn Scorer,
    column: &str,
    policy: ThresholdPolicy,
    options: &IngestOptions,
) -> Result<FileOutcome> {
    let span = info_span!("process_file", source_file = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let report = read_table(path, options).with_context(|| format!("read {}", path.display()))?;

    let request = AnalysisRequest { column, policy };
    let analysis = match analyze_table(&report.table, scorer, &request) {
        Ok(analysis) => analysis,
        Err(CoreError::UnknownColumn { column }) => {
            bail!(
                "column {:?} not found in {}; available columns: {}",
                column,
                path.display(),
                report.table.headers.join(", ")
            );
        }
    };

    debug!(
        source_file = %path.display(),
        encoding = report.encoding.as_str(),
        total_rows = report.table.record_count(),
        scored = analysis.scored_count(),
        skipped_missing = analysis.skipped_records,
        skipped_malformed = report.skipped.len(),
        duration_ms = start.elapsed().as_millis(),
        "file processed"
    );

    Ok(FileOutcome {
        path: path.to_path_buf(),
        encoding: report.encoding,
        total_rows: report.table.record_count(),
        skipped_rows: report.skipped,
        analysis,
    })
}
