//! Ingestion behavior: encodings, malformed records, normalization.

use std::path::PathBuf;

use tempfile::TempDir;

use senti_ingest::{
    IngestError, IngestOptions, MalformedRowMode, TextEncoding, build_column_hints, read_table,
    suggest_text_columns,
};

fn write_fixture(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

#[test]
fn ingests_a_simple_file() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "reviews.csv",
        b"review,rating\ngreat product!,5\nterrible,1\n",
    );

    let report = read_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(report.encoding, TextEncoding::Utf8);
    assert_eq!(report.table.headers, vec!["review", "rating"]);
    assert_eq!(report.table.record_count(), 2);
    assert!(report.skipped.is_empty());

    let first = &report.table.rows[0];
    assert_eq!(first.cells[0].as_text(), Some("great product!"));
    assert_eq!(first.cells[1].as_text(), Some("5"));
}

#[test]
fn empty_cells_become_missing() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reviews.csv", b"review,rating\n,5\n   ,4\nok,\n");

    let report = read_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(report.table.record_count(), 3);
    assert!(report.table.rows[0].cells[0].is_missing());
    assert!(report.table.rows[1].cells[0].is_missing());
    assert!(report.table.rows[2].cells[1].is_missing());
}

#[test]
fn fully_empty_rows_are_dropped() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reviews.csv", b"review,rating\ngood,4\n,\nbad,1\n");

    let report = read_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(report.table.record_count(), 2);
}

#[test]
fn latin1_file_ingests_losslessly() {
    let dir = TempDir::new().unwrap();
    // "café" with a raw 0xE9 byte: invalid UTF-8, valid ISO-8859-1.
    let path = write_fixture(&dir, "reviews.csv", b"review\ncaf\xE9 was great\n");

    let report = read_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(report.encoding, TextEncoding::Latin1);
    assert_eq!(
        report.table.rows[0].cells[0].as_text(),
        Some("caf\u{e9} was great")
    );
}

#[test]
fn strict_mode_fails_on_ragged_records() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reviews.csv", b"review,rating\ngood,4\nbad,1,extra\n");

    let err = read_table(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::MalformedRecord { line: 2, .. }));
}

#[test]
fn lenient_mode_skips_and_reports_ragged_records() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "reviews.csv",
        b"review,rating\ngood,4\nbad,1,extra\nfine,3\n",
    );

    let report = read_table(&path, &IngestOptions::lenient()).unwrap();
    assert_eq!(report.table.record_count(), 2);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].record, 2);
}

#[test]
fn row_ids_are_stable_across_lenient_and_strict_runs() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reviews.csv", b"review\nfirst\nsecond\n");

    let strict = read_table(&path, &IngestOptions::default()).unwrap();
    let lenient = read_table(
        &path,
        &IngestOptions {
            malformed: MalformedRowMode::Skip,
        },
    )
    .unwrap();

    assert_eq!(strict.table.rows[0].id, lenient.table.rows[0].id);
    assert_eq!(strict.table.rows[1].id, lenient.table.rows[1].id);
    assert_ne!(strict.table.rows[0].id, strict.table.rows[1].id);
}

#[test]
fn missing_header_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.csv", b"");

    let err = read_table(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, IngestError::MissingHeader { .. }));
}

#[test]
fn header_only_file_yields_zero_rows() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reviews.csv", b"review,rating\n");

    let report = read_table(&path, &IngestOptions::default()).unwrap();
    assert_eq!(report.table.record_count(), 0);
}

#[test]
fn hints_identify_text_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "reviews.csv",
        b"review,rating\nthe battery life is outstanding,5\nscreen cracked within a week,1\nperfectly fine for the price,4\n",
    );

    let report = read_table(&path, &IngestOptions::default()).unwrap();
    let hints = build_column_hints(&report.table);

    let review = hints.get("review").unwrap();
    assert!(!review.is_numeric);
    assert!(review.is_text_like());

    let rating = hints.get("rating").unwrap();
    assert!(rating.is_numeric);
    assert!(!rating.is_text_like());

    let suggested = suggest_text_columns(&report.table, &hints);
    assert_eq!(suggested, vec!["review".to_string()]);
}
