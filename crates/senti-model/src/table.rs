#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};

use crate::ids::RowId;

/// A single cell of an ingested table.
///
/// Cells that are empty after trimming are Missing; the analysis pipeline
/// excludes them from scoring rather than coercing them to a default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(value) => Some(value),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceRow {
    pub id: RowId,
    pub cells: Vec<CellValue>,
}

/// An ordered, schema-fixed sequence of rows from one CSV source.
///
/// The column schema is immutable once loaded; derived sentiment fields live
/// on analysis results, never written back into the table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataTable {
    /// Stable source identifier used for row-id derivation (e.g. the input
    /// path as given).
    pub source_id: String,
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

impl DataTable {
    pub fn new(source_id: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            source_id: source_id.into(),
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: SourceRow) {
        self.rows.push(row);
    }

    pub fn record_count(&self) -> usize {
        self.rows.len()
    }

    /// Resolve a column name to its index, exact match first, then
    /// case-insensitive.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if let Some(idx) = self.headers.iter().position(|header| header == name) {
            return Some(idx);
        }
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(name))
    }

    /// The cell at (row, column), if the row is wide enough.
    pub fn cell(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row).and_then(|r| r.cells.get(column))
    }
}
