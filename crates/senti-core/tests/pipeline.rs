//! Pipeline behavior over in-memory tables.

use senti_core::{AnalysisRequest, CoreError, analyze_table};
use senti_lexicon::SentimentModel;
use senti_model::{
    Category, CellValue, DataTable, RowId, Scorer, SourceRow, StarRating, ThresholdPolicy,
};

/// Deterministic stub scorer keyed on marker words.
struct KeywordScorer;

impl Scorer for KeywordScorer {
    fn score(&self, text: &str) -> f64 {
        if text.contains("good") {
            0.8
        } else if text.contains("bad") {
            -0.8
        } else {
            0.0
        }
    }
}

fn table_of(column: &str, values: Vec<Option<&str>>) -> DataTable {
    let mut table = DataTable::new("test.csv", vec![column.to_string()]);
    for (idx, value) in values.into_iter().enumerate() {
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

fn wide_request(column: &str) -> AnalysisRequest<'_> {
    AnalysisRequest {
        column,
        policy: ThresholdPolicy::Wide,
    }
}

#[test]
fn canonical_scenario_with_the_real_model() {
    let model = SentimentModel::load().expect("load model");
    let table = table_of(
        "review",
        vec![Some("great product!"), Some("terrible, awful"), Some("it's ok")],
    );

    let result = analyze_table(&table, &model, &wide_request("review")).unwrap();

    let categories: Vec<Category> = result.records.iter().map(|r| r.category).collect();
    assert_eq!(
        categories,
        vec![Category::Positive, Category::Negative, Category::Neutral]
    );
    assert_eq!(result.breakdown.count(Category::Positive), 1);
    assert_eq!(result.breakdown.count(Category::Neutral), 1);
    assert_eq!(result.breakdown.count(Category::Negative), 1);
    for category in Category::ALL {
        assert!((result.breakdown.percent(category) - 100.0 / 3.0).abs() < 1e-9);
    }
}

#[test]
fn missing_cells_are_skipped_not_coerced() {
    let table = table_of(
        "review",
        vec![Some("good"), None, Some("bad"), None, Some("meh")],
    );

    let result = analyze_table(&table, &KeywordScorer, &wide_request("review")).unwrap();

    assert_eq!(result.scored_count(), 3);
    assert_eq!(result.skipped_records, 2);
    assert_eq!(result.breakdown.total, 3);
    // The missing rows must not surface as Neutral.
    assert_eq!(result.breakdown.count(Category::Neutral), 1);
}

#[test]
fn unknown_column_fails_before_scoring() {
    let table = table_of("review", vec![Some("good")]);
    let err = analyze_table(&table, &KeywordScorer, &wide_request("comments")).unwrap_err();
    assert!(matches!(err, CoreError::UnknownColumn { .. }));
}

#[test]
fn column_resolution_is_case_insensitive() {
    let table = table_of("Review", vec![Some("good")]);
    let result = analyze_table(&table, &KeywordScorer, &wide_request("review")).unwrap();
    assert_eq!(result.column, "Review");
    assert_eq!(result.scored_count(), 1);
}

#[test]
fn rerun_is_idempotent() {
    let model = SentimentModel::load().expect("load model");
    let table = table_of(
        "review",
        vec![
            Some("absolutely love it"),
            Some("worst purchase ever"),
            Some("does the job"),
            None,
        ],
    );
    let request = wide_request("review");

    let first = analyze_table(&table, &model, &request).unwrap();
    let second = analyze_table(&table, &model, &request).unwrap();

    let first_json = serde_json::to_value(&first).unwrap();
    let second_json = serde_json::to_value(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[test]
fn zero_row_table_yields_empty_aggregates() {
    let table = table_of("review", vec![]);
    let result = analyze_table(&table, &KeywordScorer, &wide_request("review")).unwrap();

    assert_eq!(result.scored_count(), 0);
    assert!(result.breakdown.is_empty());
    assert!(result.breakdown.pareto().is_empty());
    assert!(result.stats.is_none());
    assert_eq!(result.stars.total(), 0);
}

#[test]
fn identical_text_collapses_to_one_category() {
    let table = table_of("review", vec![Some("good"), Some("good"), Some("good")]);
    let result = analyze_table(&table, &KeywordScorer, &wide_request("review")).unwrap();

    assert_eq!(result.breakdown.categories.len(), 1);
    assert!((result.breakdown.percent(Category::Positive) - 100.0).abs() < 1e-9);
    let scores: Vec<f64> = result.records.iter().map(|r| r.score).collect();
    assert!(scores.iter().all(|score| *score == scores[0]));
}

#[test]
fn pareto_ends_at_one_hundred_percent() {
    let table = table_of(
        "review",
        vec![Some("good"), Some("good"), Some("bad"), Some("meh")],
    );
    let result = analyze_table(&table, &KeywordScorer, &wide_request("review")).unwrap();

    let pareto = result.breakdown.pareto();
    assert_eq!(pareto[0].category, Category::Positive);
    assert!((pareto.last().unwrap().cumulative_percent - 100.0).abs() < 1e-9);
}

#[test]
fn stars_follow_scores() {
    let table = table_of("review", vec![Some("good"), Some("bad"), Some("meh")]);
    let result = analyze_table(&table, &KeywordScorer, &wide_request("review")).unwrap();

    let ratings: Vec<u8> = result.records.iter().map(|r| r.stars.as_u8()).collect();
    assert_eq!(ratings, vec![5, 1, 3]);
    assert_eq!(result.stars.count(StarRating::MAX), 1);
    assert_eq!(result.stars.count(StarRating::MIN), 1);
}

#[test]
fn narrow_policy_classifies_the_same_scores_differently() {
    let table = table_of("review", vec![Some("meh")]);
    // 0.0 is Neutral under both policies; 0.3 differs.
    struct Fixed(f64);
    impl Scorer for Fixed {
        fn score(&self, _text: &str) -> f64 {
            self.0
        }
    }

    let wide = analyze_table(&table, &Fixed(0.3), &wide_request("review")).unwrap();
    let narrow = analyze_table(
        &table,
        &Fixed(0.3),
        &AnalysisRequest {
            column: "review",
            policy: ThresholdPolicy::Narrow,
        },
    )
    .unwrap();

    assert_eq!(wide.breakdown.count(Category::Neutral), 1);
    assert_eq!(narrow.breakdown.count(Category::Positive), 1);
}
