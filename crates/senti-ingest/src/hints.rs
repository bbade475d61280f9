#![deny(unsafe_code)]

use std::collections::{BTreeMap, BTreeSet};

use senti_model::DataTable;

/// Shape statistics for one column, used to suggest analysis candidates.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct ColumnHint {
    /// Every non-missing cell parses as a number.
    pub is_numeric: bool,
    /// Share of missing cells, 0-1.
    pub null_ratio: f64,
    /// Distinct non-missing values over non-missing count, 0-1.
    pub unique_ratio: f64,
    /// Mean character length of non-missing cells.
    pub mean_length: f64,
    /// Share of non-missing cells containing whitespace, 0-1.
    pub space_ratio: f64,
}

impl ColumnHint {
    /// Heuristic: free-text columns are non-numeric, mostly populated, and
    /// either multi-word or long.
    pub fn is_text_like(&self) -> bool {
        !self.is_numeric
            && self.null_ratio < 0.5
            && (self.space_ratio >= 0.2 || self.mean_length >= 12.0)
    }
}

/// Compute per-column hints over an ingested table.
pub fn build_column_hints(table: &DataTable) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = table.record_count();
    for (col_idx, header) in table.headers.iter().enumerate() {
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut with_space = 0usize;
        let mut total_length = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let Some(value) = row.cells.get(col_idx).and_then(|cell| cell.as_text()) else {
                continue;
            };
            non_null += 1;
            total_length += value.chars().count();
            if value.parse::<f64>().is_ok() {
                numeric += 1;
            }
            if value.contains(char::is_whitespace) {
                with_space += 1;
            }
            uniques.insert(value.to_string());
        }

        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count.saturating_sub(non_null)) as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        let mean_length = if non_null == 0 {
            0.0
        } else {
            total_length as f64 / non_null as f64
        };
        let space_ratio = if non_null == 0 {
            0.0
        } else {
            with_space as f64 / non_null as f64
        };
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric: non_null > 0 && numeric == non_null,
                null_ratio,
                unique_ratio,
                mean_length,
                space_ratio,
            },
        );
    }
    hints
}

/// Text-like columns in header order.
pub fn suggest_text_columns(
    table: &DataTable,
    hints: &BTreeMap<String, ColumnHint>,
) -> Vec<String> {
    table
        .headers
        .iter()
        .filter(|header| {
            hints
                .get(header.as_str())
                .map(ColumnHint::is_text_like)
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}
