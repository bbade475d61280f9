use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("star rating out of range (expected 1-5): {0}")]
    InvalidStarRating(u8),
    #[error("unknown sentiment category: {0}")]
    UnknownCategory(String),
    #[error("unknown threshold policy: {0}")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
