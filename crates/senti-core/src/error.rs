use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("column not found: {column}")]
    UnknownColumn { column: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
