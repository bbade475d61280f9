//! Star-rating distribution for the rating view.

use serde::Serialize;

use senti_model::{StarBreakdown, StarRating};

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StarCount {
    pub stars: StarRating,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StarChart {
    /// All five ratings in ascending order, zero counts included.
    pub counts: Vec<StarCount>,
    pub total: usize,
}

pub fn build_star_chart(breakdown: &StarBreakdown) -> StarChart {
    let total = breakdown.total();
    let counts = breakdown
        .iter()
        .map(|(stars, count)| StarCount {
            stars,
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect();
    StarChart { counts, total }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_ratings_are_present() {
        let mut breakdown = StarBreakdown::default();
        breakdown.record(StarRating::from_score(0.9));
        breakdown.record(StarRating::from_score(0.9));
        breakdown.record(StarRating::from_score(0.0));

        let chart = build_star_chart(&breakdown);
        assert_eq!(chart.counts.len(), 5);
        assert_eq!(chart.total, 3);
        assert_eq!(chart.counts[4].count, 2);
        assert_eq!(chart.counts[2].count, 1);
        assert!((chart.counts[4].percent - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_breakdown_has_zero_percentages() {
        let chart = build_star_chart(&StarBreakdown::default());
        assert_eq!(chart.total, 0);
        assert!(chart.counts.iter().all(|entry| entry.percent == 0.0));
    }
}
