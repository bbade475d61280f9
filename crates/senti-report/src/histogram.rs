//! Score histogram and the frequency-polygon overlay derived from it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HistogramOptions {
    pub bins: usize,
    /// Score range the bins partition; the last bin is closed on the right.
    pub range: (f64, f64),
}

impl Default for HistogramOptions {
    fn default() -> Self {
        Self {
            bins: 10,
            range: (-1.0, 1.0),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: usize,
    /// Probability density: count / (total * bin_width).
    pub density: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
    pub bin_width: f64,
    pub total: usize,
}

/// Midpoint of a bin with its density, for the frequency-polygon line.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PolygonPoint {
    pub midpoint: f64,
    pub density: f64,
}

/// Bucket scores into equal-width bins over the configured range.
///
/// Scores outside the range are clamped into the edge bins, which cannot
/// happen for compound scores with the default range. Zero scores produce
/// zero-count bins with zero density.
pub fn build_histogram(scores: &[f64], options: &HistogramOptions) -> Histogram {
    let bins = options.bins.max(1);
    let (low, high) = options.range;
    let width = (high - low) / bins as f64;

    let mut counts = vec![0usize; bins];
    for score in scores {
        let position = (score - low) / width;
        let index = (position.floor() as isize).clamp(0, bins as isize - 1) as usize;
        counts[index] += 1;
    }

    let total = scores.len();
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| {
            let start = low + idx as f64 * width;
            let density = if total == 0 {
                0.0
            } else {
                count as f64 / (total as f64 * width)
            };
            HistogramBin {
                start,
                end: start + width,
                count,
                density,
            }
        })
        .collect();

    Histogram {
        bins,
        bin_width: width,
        total,
    }
}

/// The frequency polygon traces bin midpoints at their densities.
pub fn build_frequency_polygon(histogram: &Histogram) -> Vec<PolygonPoint> {
    histogram
        .bins
        .iter()
        .map(|bin| PolygonPoint {
            midpoint: (bin.start + bin.end) / 2.0,
            density: bin.density,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_total() {
        let scores = [-0.9, -0.2, 0.0, 0.3, 0.3, 0.95, 1.0];
        let histogram = build_histogram(&scores, &HistogramOptions::default());
        let counted: usize = histogram.bins.iter().map(|bin| bin.count).sum();
        assert_eq!(counted, scores.len());
        assert_eq!(histogram.total, scores.len());
        assert_eq!(histogram.bins.len(), 10);
    }

    #[test]
    fn upper_boundary_lands_in_the_last_bin() {
        let histogram = build_histogram(&[1.0], &HistogramOptions::default());
        assert_eq!(histogram.bins.last().unwrap().count, 1);
    }

    #[test]
    fn densities_integrate_to_one() {
        let scores = [-0.8, -0.1, 0.1, 0.4, 0.7];
        let histogram = build_histogram(&scores, &HistogramOptions::default());
        let integral: f64 = histogram
            .bins
            .iter()
            .map(|bin| bin.density * histogram.bin_width)
            .sum();
        assert!((integral - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_scores_yield_zero_bins() {
        let histogram = build_histogram(&[], &HistogramOptions::default());
        assert_eq!(histogram.total, 0);
        assert!(histogram.bins.iter().all(|bin| bin.count == 0));
        assert!(histogram.bins.iter().all(|bin| bin.density == 0.0));
    }

    #[test]
    fn polygon_follows_midpoints() {
        let histogram = build_histogram(&[0.0], &HistogramOptions { bins: 2, range: (-1.0, 1.0) });
        let polygon = build_frequency_polygon(&histogram);
        assert_eq!(polygon.len(), 2);
        assert!((polygon[0].midpoint + 0.5).abs() < 1e-12);
        assert!((polygon[1].midpoint - 0.5).abs() < 1e-12);
    }
}
