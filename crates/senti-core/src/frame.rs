//! Polars view of a table joined with its derived sentiment columns.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

use senti_model::DataTable;

use crate::pipeline::AnalysisResult;

/// Derived column holding the compound polarity score.
pub const SCORE_COLUMN: &str = "SENTIMENT_SCORE";
/// Derived column holding the category label.
pub const CATEGORY_COLUMN: &str = "SENTIMENT";
/// Derived column holding the 1-5 star rating.
pub const STARS_COLUMN: &str = "STARS";

/// The original columns plus the derived sentiment columns, one row per
/// source row. Unscored rows carry nulls in the derived columns.
#[derive(Debug, Clone)]
pub struct AnalysisFrame {
    pub source_id: String,
    pub data: DataFrame,
}

impl AnalysisFrame {
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Join a source table with the derived fields of an analysis run.
pub fn build_analysis_frame(
    table: &DataTable,
    result: &AnalysisResult,
) -> PolarsResult<AnalysisFrame> {
    let row_count = table.record_count();
    let mut columns: Vec<Column> = Vec::with_capacity(table.headers.len() + 3);

    for (col_idx, header) in table.headers.iter().enumerate() {
        let values: Vec<Option<String>> = table
            .rows
            .iter()
            .map(|row| {
                row.cells
                    .get(col_idx)
                    .and_then(|cell| cell.as_text())
                    .map(String::from)
            })
            .collect();
        columns.push(Series::new(header.as_str().into(), values).into_column());
    }

    let mut scores: Vec<Option<f64>> = vec![None; row_count];
    let mut categories: Vec<Option<String>> = vec![None; row_count];
    let mut stars: Vec<Option<i64>> = vec![None; row_count];
    for record in &result.records {
        scores[record.row_index] = Some(record.score);
        categories[record.row_index] = Some(record.category.as_str().to_string());
        stars[record.row_index] = Some(i64::from(record.stars.as_u8()));
    }
    columns.push(Series::new(SCORE_COLUMN.into(), scores).into_column());
    columns.push(Series::new(CATEGORY_COLUMN.into(), categories).into_column());
    columns.push(Series::new(STARS_COLUMN.into(), stars).into_column());

    let data = DataFrame::new(columns)?;
    Ok(AnalysisFrame {
        source_id: table.source_id.clone(),
        data,
    })
}
