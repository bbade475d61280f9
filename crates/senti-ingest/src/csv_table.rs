#![deny(unsafe_code)]

use std::path::Path;

use sha2::Digest;
use tracing::debug;

use senti_model::{CellValue, DataTable, RowId, SourceRow};

use crate::encoding::{TextEncoding, decode_bytes};
use crate::error::{IngestError, Result};

/// How to treat CSV records the parser rejects (ragged widths, broken
/// structure).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedRowMode {
    /// The first malformed record fails the whole load.
    #[default]
    Fail,
    /// Malformed records are skipped and reported alongside the table.
    Skip,
}

#[derive(Debug, Clone, Default)]
pub struct IngestOptions {
    pub malformed: MalformedRowMode,
}

impl IngestOptions {
    pub fn lenient() -> Self {
        Self {
            malformed: MalformedRowMode::Skip,
        }
    }
}

/// A skipped record in lenient mode.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RowError {
    /// One-based data record number within the file.
    pub record: u64,
    pub message: String,
}

/// Result of ingesting one CSV file.
#[derive(Debug, Clone)]
pub struct IngestReport {
    pub table: DataTable,
    /// Records skipped in lenient mode; always empty in strict mode.
    pub skipped: Vec<RowError>,
    pub encoding: TextEncoding,
}

/// Deterministic row id: sha256("<source_id>\0<record_number>"), first 16
/// bytes. Skipped records still consume their record number, so ids are
/// stable whether or not a load was lenient.
pub fn derive_row_id(source_id: &str, record_number: u64) -> RowId {
    let mut hasher = sha2::Sha256::new();
    hasher.update(source_id.as_bytes());
    hasher.update([0u8]);
    hasher.update(record_number.to_string().as_bytes());
    let digest: [u8; 32] = hasher.finalize().into();
    RowId::from_first_16_bytes_of_sha256(digest)
}

/// Read a CSV file into a `DataTable`.
///
/// The first record is the header row. Cells are trimmed; cells empty after
/// trimming become `CellValue::Missing`. Fully empty rows are dropped.
/// UTF-8 is tried first, then ISO-8859-1 (see `decode_bytes`).
pub fn read_table(path: &Path, options: &IngestOptions) -> Result<IngestReport> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::file_read(path, e))?;
    let (text, encoding) = decode_bytes(&bytes);
    let source_id = path.display().to_string();

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(text.as_bytes());

    let mut records = reader.records();
    let headers: Vec<String> = loop {
        match records.next() {
            Some(Ok(record)) => break record.iter().map(normalize_header).collect(),
            Some(Err(e)) => {
                return Err(IngestError::MalformedRecord {
                    path: path.to_path_buf(),
                    line: 0,
                    message: e.to_string(),
                });
            }
            None => {
                return Err(IngestError::MissingHeader {
                    path: path.to_path_buf(),
                });
            }
        }
    };

    let mut table = DataTable::new(source_id.clone(), headers);
    let mut skipped = Vec::new();

    for (idx, record) in records.enumerate() {
        let record_number = (idx as u64) + 1;
        let record = match record {
            Ok(record) => record,
            Err(e) => match options.malformed {
                MalformedRowMode::Fail => {
                    return Err(IngestError::MalformedRecord {
                        path: path.to_path_buf(),
                        line: record_number,
                        message: e.to_string(),
                    });
                }
                MalformedRowMode::Skip => {
                    skipped.push(RowError {
                        record: record_number,
                        message: e.to_string(),
                    });
                    continue;
                }
            },
        };

        let cells: Vec<CellValue> = record.iter().map(CellValue::from_raw).collect();
        if cells.iter().all(CellValue::is_missing) {
            continue;
        }
        table.push_row(SourceRow {
            id: derive_row_id(&source_id, record_number),
            cells,
        });
    }

    debug!(
        source = %source_id,
        encoding = encoding.as_str(),
        row_count = table.record_count(),
        skipped_count = skipped.len(),
        "csv ingested"
    );

    Ok(IngestReport {
        table,
        skipped,
        encoding,
    })
}

/// Collapse internal whitespace and strip the BOM from a raw header cell.
fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
