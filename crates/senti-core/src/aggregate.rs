//! Category aggregation over classified records, plus raw value counts for
//! the distribution views.

use std::collections::BTreeMap;

use senti_model::{Category, CategoryBreakdown, DataTable, StarBreakdown, StarRating};

use crate::error::{CoreError, Result};

/// Count categories into a breakdown with percentages of the scored total.
///
/// An empty input produces an empty breakdown; there is no zero-division
/// case. Only categories that actually occur appear in the result.
pub fn aggregate_categories<I>(categories: I) -> CategoryBreakdown
where
    I: IntoIterator<Item = Category>,
{
    let mut counts: BTreeMap<Category, usize> = BTreeMap::new();
    let mut total = 0usize;
    for category in categories {
        *counts.entry(category).or_insert(0) += 1;
        total += 1;
    }

    let mut breakdown = CategoryBreakdown::default();
    for (category, count) in counts {
        breakdown.insert(category, count, total);
    }
    breakdown
}

/// Count star ratings; all five ratings are present in the result.
pub fn aggregate_stars<I>(ratings: I) -> StarBreakdown
where
    I: IntoIterator<Item = StarRating>,
{
    let mut breakdown = StarBreakdown::default();
    for rating in ratings {
        breakdown.record(rating);
    }
    breakdown
}

/// One distinct value of a column with its frequency.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ValueCount {
    pub value: String,
    pub count: usize,
    /// Percentage of the column's non-missing cells, 0-100.
    pub percent: f64,
}

/// Frequency of each distinct value in a column, missing cells excluded.
///
/// Sorted by count descending, ties by value ascending, so the result is
/// independent of row order. Backs the distribution bar/pie views that chart
/// a raw column without scoring it.
pub fn column_value_counts(table: &DataTable, column: &str) -> Result<Vec<ValueCount>> {
    let Some(column_index) = table.column_index(column) else {
        return Err(CoreError::UnknownColumn {
            column: column.to_string(),
        });
    };

    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0usize;
    for row in &table.rows {
        let Some(value) = row.cells.get(column_index).and_then(|cell| cell.as_text()) else {
            continue;
        };
        *counts.entry(value.to_string()).or_insert(0) += 1;
        total += 1;
    }

    let mut ranked: Vec<ValueCount> = counts
        .into_iter()
        .map(|(value, count)| ValueCount {
            value,
            count,
            percent: if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            },
        })
        .collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count).then(a.value.cmp(&b.value)));
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use senti_model::{CellValue, RowId, SourceRow};

    #[test]
    fn counts_and_percentages() {
        let breakdown = aggregate_categories([
            Category::Positive,
            Category::Negative,
            Category::Neutral,
            Category::Positive,
        ]);
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.count(Category::Positive), 2);
        assert_eq!(breakdown.count(Category::Neutral), 1);
        assert!((breakdown.percent(Category::Positive) - 50.0).abs() < 1e-9);

        let sum: usize = Category::ALL
            .iter()
            .map(|category| breakdown.count(*category))
            .sum();
        assert_eq!(sum, breakdown.total);
    }

    #[test]
    fn empty_input_yields_empty_breakdown() {
        let breakdown = aggregate_categories(Vec::<Category>::new());
        assert!(breakdown.is_empty());
        assert!(breakdown.categories.is_empty());
    }

    #[test]
    fn single_category_is_one_hundred_percent() {
        let breakdown = aggregate_categories([Category::Neutral, Category::Neutral]);
        assert_eq!(breakdown.count(Category::Neutral), 2);
        assert!((breakdown.percent(Category::Neutral) - 100.0).abs() < 1e-9);
    }

    fn value_table(values: &[Option<&str>]) -> DataTable {
        let mut table = DataTable::new("test.csv", vec!["rating".to_string()]);
        for (idx, value) in values.iter().enumerate() {
            let cell = match value {
                Some(text) => CellValue::from_raw(text),
                None => CellValue::Missing,
            };
            table.push_row(SourceRow {
                id: RowId::from_first_16_bytes_of_sha256([idx as u8; 32]),
                cells: vec![cell],
            });
        }
        table
    }

    #[test]
    fn value_counts_rank_by_frequency_then_value() {
        let table = value_table(&[Some("5"), Some("1"), Some("5"), None, Some("3")]);
        let ranked = column_value_counts(&table, "rating").unwrap();

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].value, "5");
        assert_eq!(ranked[0].count, 2);
        assert!((ranked[0].percent - 50.0).abs() < 1e-9);
        // Tie between "1" and "3" resolves by value ascending.
        assert_eq!(ranked[1].value, "1");
        assert_eq!(ranked[2].value, "3");
    }

    #[test]
    fn value_counts_reject_unknown_columns() {
        let table = value_table(&[Some("5")]);
        assert!(column_value_counts(&table, "nope").is_err());
    }

    #[test]
    fn value_counts_of_empty_column_are_empty() {
        let table = value_table(&[None, None]);
        assert!(column_value_counts(&table, "rating").unwrap().is_empty());
    }

    #[test]
    fn star_breakdown_covers_all_ratings() {
        let stars = aggregate_stars([
            StarRating::from_score(0.9),
            StarRating::from_score(0.9),
            StarRating::from_score(-0.9),
        ]);
        assert_eq!(stars.total(), 3);
        assert_eq!(stars.count(StarRating::MAX), 2);
        assert_eq!(stars.count(StarRating::MIN), 1);
        assert_eq!(stars.iter().count(), 5);
    }
}
