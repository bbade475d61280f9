#![deny(unsafe_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to parse lexicon: {message}")]
    Csv { message: String },

    #[error("lexicon entry {line} is missing a word")]
    MissingWord { line: usize },

    #[error("invalid valence for {word:?}: {value}")]
    InvalidValence { word: String, value: String },

    #[error("valence for {word:?} out of range (expected [-4, 4]): {valence}")]
    ValenceOutOfRange { word: String, valence: f64 },

    #[error("lexicon is empty")]
    Empty,
}
