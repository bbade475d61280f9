//! Scatter and pictograph series: one point per scored record in row order.

use serde::Serialize;

use senti_model::{Category, ScoredRecord};

/// Marker symbol for the pictograph view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PictographSymbol {
    Star,
    Circle,
    Square,
}

impl PictographSymbol {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Positive => PictographSymbol::Star,
            Category::Neutral => PictographSymbol::Circle,
            Category::Negative => PictographSymbol::Square,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    /// X position: the record's zero-based row index.
    pub row_index: usize,
    pub score: f64,
    pub category: Category,
    pub symbol: PictographSymbol,
}

/// Points in row order. The same series backs the scatter, pictograph and
/// line views; only the mark differs.
pub fn build_scatter_series(records: &[ScoredRecord]) -> Vec<ScatterPoint> {
    records
        .iter()
        .map(|record| ScatterPoint {
            row_index: record.row_index,
            score: record.score,
            category: record.category,
            symbol: PictographSymbol::for_category(record.category),
        })
        .collect()
}
