use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Three-way sentiment category derived from a compound polarity score.
///
/// The declaration order is the fixed tie-break order used when categories
/// are ranked by frequency (Pareto ordering): Positive, then Neutral, then
/// Negative.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum Category {
    Positive,
    Neutral,
    Negative,
}

impl Category {
    /// All categories in fixed enum order.
    pub const ALL: [Category; 3] = [Category::Positive, Category::Neutral, Category::Negative];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "Positive",
            Category::Neutral => "Neutral",
            Category::Negative => "Negative",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Ok(Category::Positive),
            "neutral" => Ok(Category::Neutral),
            "negative" => Ok(Category::Negative),
            _ => Err(ModelError::UnknownCategory(s.to_string())),
        }
    }
}

/// A 1-5 star bucketing of the compound score, used by the rating view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: StarRating = StarRating(1);
    pub const MAX: StarRating = StarRating(5);

    /// All ratings in ascending order.
    pub const ALL: [StarRating; 5] = [
        StarRating(1),
        StarRating(2),
        StarRating(3),
        StarRating(4),
        StarRating(5),
    ];

    pub fn new(value: u8) -> Result<Self, ModelError> {
        if (1..=5).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ModelError::InvalidStarRating(value))
        }
    }

    /// Bucket a compound score into a rating.
    ///
    /// Total over [-1, 1]; boundaries are closed toward the higher rating.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.5 {
            StarRating(5)
        } else if score >= 0.2 {
            StarRating(4)
        } else if score >= -0.2 {
            StarRating(3)
        } else if score >= -0.5 {
            StarRating(2)
        } else {
            StarRating(1)
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<'de> Deserialize<'de> for StarRating {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u8::deserialize(deserializer)?;
        StarRating::new(value).map_err(serde::de::Error::custom)
    }
}
