//! Describe-style summary statistics over compound scores.

use senti_model::ScoreStats;

/// Summary statistics for a set of scores; None when the set is empty.
///
/// Quantiles use linear interpolation between order statistics. The standard
/// deviation is the sample deviation and is None for fewer than two scores.
pub fn score_stats(scores: &[f64]) -> Option<ScoreStats> {
    if scores.is_empty() {
        return None;
    }

    let count = scores.len();
    let mean = scores.iter().sum::<f64>() / count as f64;

    let std_dev = if count < 2 {
        None
    } else {
        let variance = scores
            .iter()
            .map(|score| {
                let delta = score - mean;
                delta * delta
            })
            .sum::<f64>()
            / (count - 1) as f64;
        Some(variance.sqrt())
    };

    let mut sorted = scores.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(ScoreStats {
        count,
        mean,
        std_dev,
        min: sorted[0],
        q1: quantile(&sorted, 0.25),
        median: quantile(&sorted, 0.5),
        q3: quantile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}

/// Linear-interpolated quantile over an ascending-sorted, non-empty slice.
pub(crate) fn quantile(sorted: &[f64], p: f64) -> f64 {
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
