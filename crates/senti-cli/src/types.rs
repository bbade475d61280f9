use std::path::PathBuf;

use senti_ingest::RowError;
use senti_lexicon::SentimentScores;
use senti_model::{Category, CategoryBreakdown, ScoreStats, StarBreakdown, StarRating};

#[derive(Debug)]
pub struct AnalyzeRunResult {
    pub files: Vec<FileSummary>,
    /// Per-file failures; other files still processed.
    pub errors: Vec<String>,
    pub report_paths: Vec<PathBuf>,
    pub has_errors: bool,
}

#[derive(Debug)]
pub struct FileSummary {
    pub source: String,
    pub encoding: &'static str,
    pub total_rows: usize,
    pub scored: usize,
    pub skipped_missing: usize,
    pub skipped_malformed: usize,
    pub breakdown: CategoryBreakdown,
    pub stars: StarBreakdown,
    pub stats: Option<ScoreStats>,
    pub row_errors: Vec<RowError>,
}

/// One directly-scored text snippet for the `score` command.
#[derive(Debug)]
pub struct ScoredText {
    pub text: String,
    pub scores: SentimentScores,
    pub category: Category,
    pub stars: StarRating,
}
