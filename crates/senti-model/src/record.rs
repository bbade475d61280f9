use serde::{Deserialize, Serialize};

use crate::category::{Category, StarRating};
use crate::ids::RowId;

/// One analyzed row: the selected column's text plus the derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredRecord {
    /// Deterministic identity of the source row.
    pub row_id: RowId,
    /// Zero-based position of the row in its source table.
    pub row_index: usize,
    /// The cell value that was scored.
    pub text: String,
    /// Compound polarity score in [-1, 1].
    pub score: f64,
    /// Three-way category under the policy the run was executed with.
    pub category: Category,
    /// Five-way star bucketing of the same score.
    pub stars: StarRating,
}
