#![deny(unsafe_code)]

use std::collections::BTreeMap;

use crate::error::LexiconError;

/// The embedded valence lexicon shipped with the crate.
///
/// One row per word with a signed valence on the conventional [-4, 4] scale
/// used by lexicon sentiment models; compound-score normalization maps the
/// summed valences into [-1, 1].
const LEXICON_CSV: &str = include_str!("../assets/lexicon.csv");

/// Word-to-valence table, parsed once at model construction.
#[derive(Debug, Clone)]
pub struct Lexicon {
    valences: BTreeMap<String, f64>,
}

impl Lexicon {
    /// Parse the embedded lexicon asset.
    pub fn embedded() -> Result<Self, LexiconError> {
        Self::parse(LEXICON_CSV)
    }

    /// Parse a lexicon from CSV text with `word,valence` rows.
    pub fn parse(data: &str) -> Result<Self, LexiconError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(data.as_bytes());

        let mut valences = BTreeMap::new();
        for (idx, row) in reader.records().enumerate() {
            let row = row.map_err(|e| LexiconError::Csv {
                message: e.to_string(),
            })?;
            let word = row
                .get(0)
                .map(str::trim)
                .filter(|w| !w.is_empty())
                .ok_or(LexiconError::MissingWord { line: idx + 2 })?;
            let raw_valence = row.get(1).map(str::trim).unwrap_or("");
            let valence: f64 =
                raw_valence
                    .parse()
                    .map_err(|_| LexiconError::InvalidValence {
                        word: word.to_string(),
                        value: raw_valence.to_string(),
                    })?;
            if !(-4.0..=4.0).contains(&valence) {
                return Err(LexiconError::ValenceOutOfRange {
                    word: word.to_string(),
                    valence,
                });
            }
            valences.insert(word.to_ascii_lowercase(), valence);
        }

        if valences.is_empty() {
            return Err(LexiconError::Empty);
        }
        Ok(Self { valences })
    }

    /// Valence of a lowercased token, if the lexicon knows it.
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.valences.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.valences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.valences.is_empty()
    }
}
