//! The analysis pipeline: select column, score, classify, aggregate.
//!
//! One invocation performs one full pass over a table. The pipeline is pure
//! given a scorer: re-running it on an unchanged table with the same column
//! and policy yields identical records and aggregates.

use std::time::Instant;

use tracing::{debug, info_span};

use senti_model::{
    CategoryBreakdown, DataTable, ScoreStats, ScoredRecord, Scorer, StarBreakdown, StarRating,
    ThresholdPolicy,
};

use crate::aggregate::{aggregate_categories, aggregate_stars};
use crate::error::{CoreError, Result};
use crate::stats::score_stats;

/// Parameters of one analysis run. The column is explicit on every
/// invocation; nothing is carried over between runs.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisRequest<'a> {
    /// Name of the column to score, resolved against the table's headers.
    pub column: &'a str,
    pub policy: ThresholdPolicy,
}

/// Output of one analysis run over one table.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisResult {
    pub source_id: String,
    /// The header the column name resolved to.
    pub column: String,
    pub policy: ThresholdPolicy,
    pub records: Vec<ScoredRecord>,
    /// Rows whose selected cell was missing; excluded from every aggregate.
    pub skipped_records: usize,
    pub breakdown: CategoryBreakdown,
    pub stars: StarBreakdown,
    /// None when no row was scored.
    pub stats: Option<ScoreStats>,
}

impl AnalysisResult {
    pub fn scored_count(&self) -> usize {
        self.records.len()
    }
}

/// Run the full score -> classify -> aggregate pass over a table.
///
/// Rows with a missing cell in the selected column are skipped, not coerced
/// to a default category. An unknown column fails before any scoring.
pub fn analyze_table(
    table: &DataTable,
    scorer: &dyn Scorer,
    request: &AnalysisRequest<'_>,
) -> Result<AnalysisResult> {
    let Some(column_index) = table.column_index(request.column) else {
        return Err(CoreError::UnknownColumn {
            column: request.column.to_string(),
        });
    };
    let column = table.headers[column_index].clone();

    let span = info_span!(
        "analyze",
        source = %table.source_id,
        column = %column,
        policy = %request.policy
    );
    let _guard = span.enter();
    let start = Instant::now();

    let mut records = Vec::with_capacity(table.record_count());
    let mut skipped_records = 0usize;
    for (row_index, row) in table.rows.iter().enumerate() {
        let Some(text) = row.cells.get(column_index).and_then(|cell| cell.as_text()) else {
            skipped_records += 1;
            continue;
        };
        let score = scorer.score(text);
        records.push(ScoredRecord {
            row_id: row.id,
            row_index,
            text: text.to_string(),
            score,
            category: request.policy.classify(score),
            stars: StarRating::from_score(score),
        });
    }

    let breakdown = aggregate_categories(records.iter().map(|record| record.category));
    let stars = aggregate_stars(records.iter().map(|record| record.stars));
    let scores: Vec<f64> = records.iter().map(|record| record.score).collect();
    let stats = score_stats(&scores);

    debug!(
        source = %table.source_id,
        column = %column,
        scored = records.len(),
        skipped = skipped_records,
        duration_ms = start.elapsed().as_millis(),
        "analysis complete"
    );

    Ok(AnalysisResult {
        source_id: table.source_id.clone(),
        column,
        policy: request.policy,
        records,
        skipped_records,
        breakdown,
        stars,
        stats,
    })
}
