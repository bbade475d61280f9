pub mod error;
pub mod lexicon;
pub mod scorer;

pub use error::LexiconError;
pub use lexicon::Lexicon;
pub use scorer::{SentimentModel, SentimentScores};
