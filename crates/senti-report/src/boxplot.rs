//! Per-category box statistics with 1.5 IQR whiskers.

use serde::Serialize;

use senti_model::{Category, ScoredRecord};

#[derive(Debug, Clone, Serialize)]
pub struct BoxStats {
    /// None for the box over all scored records.
    pub category: Option<Category>,
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    /// Lowest score within 1.5 IQR below q1.
    pub lower_whisker: f64,
    /// Highest score within 1.5 IQR above q3.
    pub upper_whisker: f64,
    /// Scores beyond the whiskers, ascending.
    pub outliers: Vec<f64>,
}

/// One box for all records plus one per category that occurs, in fixed enum
/// order. Empty input yields no boxes.
pub fn build_box_plots(records: &[ScoredRecord]) -> Vec<BoxStats> {
    let mut plots = Vec::new();

    let all_scores: Vec<f64> = records.iter().map(|record| record.score).collect();
    if let Some(stats) = box_stats(None, &all_scores) {
        plots.push(stats);
    }

    for category in Category::ALL {
        let scores: Vec<f64> = records
            .iter()
            .filter(|record| record.category == category)
            .map(|record| record.score)
            .collect();
        if let Some(stats) = box_stats(Some(category), &scores) {
            plots.push(stats);
        }
    }

    plots
}

fn box_stats(category: Option<Category>, scores: &[f64]) -> Option<BoxStats> {
    if scores.is_empty() {
        return None;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    let q1 = quantile(&sorted, 0.25);
    let median = quantile(&sorted, 0.5);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|score| *score >= lower_fence)
        .unwrap_or(sorted[0]);
    let upper_whisker = sorted
        .iter()
        .copied()
        .rev()
        .find(|score| *score <= upper_fence)
        .unwrap_or(sorted[sorted.len() - 1]);
    let outliers: Vec<f64> = sorted
        .iter()
        .copied()
        .filter(|score| *score < lower_fence || *score > upper_fence)
        .collect();

    Some(BoxStats {
        category,
        count: sorted.len(),
        min: sorted[0],
        q1,
        median,
        q3,
        max: sorted[sorted.len() - 1],
        lower_whisker,
        upper_whisker,
        outliers,
    })
}

/// Linear-interpolated quantile over an ascending-sorted, non-empty slice.
fn quantile(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let position = p * (n - 1) as f64;
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;
    if lower + 1 >= n {
        return sorted[n - 1];
    }
    sorted[lower] + fraction * (sorted[lower + 1] - sorted[lower])
}
