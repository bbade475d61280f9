pub mod csv_table;
pub mod discovery;
pub mod encoding;
pub mod error;
pub mod hints;

pub use csv_table::{
    IngestOptions, IngestReport, MalformedRowMode, RowError, derive_row_id, read_table,
};
pub use discovery::list_csv_files;
pub use encoding::{TextEncoding, decode_bytes};
pub use error::{IngestError, Result};
pub use hints::{ColumnHint, build_column_hints, suggest_text_columns};
