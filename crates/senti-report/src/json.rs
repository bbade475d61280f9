//! JSON report writer: the full analysis output for downstream renderers.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use senti_core::AnalysisResult;
use senti_model::{CategoryBreakdown, ScoreStats, ScoredRecord, ThresholdPolicy};

use crate::boxplot::{BoxStats, build_box_plots};
use crate::category::{CategoryChart, build_category_chart};
use crate::histogram::{
    Histogram, HistogramOptions, PolygonPoint, build_frequency_polygon, build_histogram,
};
use crate::pareto::{ParetoChart, build_pareto_chart};
use crate::scatter::{ScatterPoint, build_scatter_series};
use crate::stars::{StarChart, build_star_chart};
use crate::stemleaf::{StemLeafPlot, build_stem_leaf};

/// Everything a renderer needs for any of the chart views, in one document.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub column: String,
    pub policy: ThresholdPolicy,
    pub total_records: usize,
    pub scored_records: usize,
    pub skipped_records: usize,
    pub breakdown: CategoryBreakdown,
    pub stats: Option<ScoreStats>,
    pub category_chart: CategoryChart,
    pub pareto: ParetoChart,
    pub stars: StarChart,
    pub histogram: Histogram,
    pub frequency_polygon: Vec<PolygonPoint>,
    pub box_plots: Vec<BoxStats>,
    pub stem_leaf: StemLeafPlot,
    pub scatter: Vec<ScatterPoint>,
    pub records: Vec<ScoredRecord>,
}

impl AnalysisReport {
    pub fn from_analysis(result: &AnalysisResult) -> Self {
        let scores: Vec<f64> = result.records.iter().map(|record| record.score).collect();
        let histogram = build_histogram(&scores, &HistogramOptions::default());
        let frequency_polygon = build_frequency_polygon(&histogram);

        Self {
            source: result.source_id.clone(),
            column: result.column.clone(),
            policy: result.policy,
            total_records: result.scored_count() + result.skipped_records,
            scored_records: result.scored_count(),
            skipped_records: result.skipped_records,
            breakdown: result.breakdown.clone(),
            stats: result.stats,
            category_chart: build_category_chart(&result.breakdown),
            pareto: build_pareto_chart(&result.breakdown),
            stars: build_star_chart(&result.stars),
            histogram,
            frequency_polygon,
            box_plots: build_box_plots(&result.records),
            stem_leaf: build_stem_leaf(&scores),
            scatter: build_scatter_series(&result.records),
            records: result.records.clone(),
        }
    }
}

/// Write the report as pretty JSON named after the source file.
pub fn write_analysis_report(output_dir: &Path, report: &AnalysisReport) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("create output dir {}", output_dir.display()))?;

    let stem = Path::new(&report.source)
        .file_stem()
        .and_then(|value| value.to_str())
        .unwrap_or("analysis");
    let path = output_dir.join(format!("{stem}_sentiment.json"));

    let json = serde_json::to_string_pretty(report).context("serialize analysis report")?;
    std::fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
