use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::{Category, StarRating};

/// Per-category count and share of the scored records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub count: usize,
    /// Percentage of the scored total, 0-100.
    pub percent: f64,
}

/// Category counts over one analysis run.
///
/// `total` is the number of scored records; rows whose selected cell was
/// missing are excluded before aggregation and do not appear here. An empty
/// run produces an empty breakdown, never a division by zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryBreakdown {
    pub total: usize,
    pub categories: BTreeMap<Category, CategorySummary>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn count(&self, category: Category) -> usize {
        self.categories
            .get(&category)
            .map(|summary| summary.count)
            .unwrap_or(0)
    }

    pub fn percent(&self, category: Category) -> f64 {
        self.categories
            .get(&category)
            .map(|summary| summary.percent)
            .unwrap_or(0.0)
    }

    /// Record a category count against a scored total.
    pub fn insert(&mut self, category: Category, count: usize, total: usize) {
        self.total = total;
        let percent = if total == 0 {
            0.0
        } else {
            (count as f64 / total as f64) * 100.0
        };
        self.categories
            .insert(category, CategorySummary { count, percent });
    }

    /// Categories ranked by count descending with running cumulative share.
    ///
    /// Ties are broken by the fixed enum order of `Category`, so input order
    /// never affects the ranking. The final entry's cumulative percentage is
    /// 100 (within floating-point tolerance) whenever the breakdown is
    /// non-empty.
    pub fn pareto(&self) -> Vec<ParetoEntry> {
        let mut ranked: Vec<(Category, CategorySummary)> = self
            .categories
            .iter()
            .map(|(category, summary)| (*category, *summary))
            .collect();
        ranked.sort_by(|a, b| b.1.count.cmp(&a.1.count).then(a.0.cmp(&b.0)));

        let mut cumulative = 0.0;
        ranked
            .into_iter()
            .map(|(category, summary)| {
                cumulative += summary.percent;
                ParetoEntry {
                    category,
                    count: summary.count,
                    percent: summary.percent,
                    cumulative_percent: cumulative,
                }
            })
            .collect()
    }
}

/// One bar of a Pareto ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParetoEntry {
    pub category: Category,
    pub count: usize,
    pub percent: f64,
    pub cumulative_percent: f64,
}

/// Describe-style summary statistics over the scored records.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; None when fewer than two scores exist.
    pub std_dev: Option<f64>,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Counts per star rating; all five ratings are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarBreakdown {
    counts: [usize; 5],
}

impl StarBreakdown {
    pub fn record(&mut self, rating: StarRating) {
        self.counts[usize::from(rating.as_u8() - 1)] += 1;
    }

    pub fn count(&self, rating: StarRating) -> usize {
        self.counts[usize::from(rating.as_u8() - 1)]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// (rating, count) pairs in ascending rating order.
    pub fn iter(&self) -> impl Iterator<Item = (StarRating, usize)> + '_ {
        StarRating::ALL
            .iter()
            .map(|rating| (*rating, self.count(*rating)))
    }
}
