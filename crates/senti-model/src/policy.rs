use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::category::Category;
use crate::error::ModelError;

/// Named threshold policy mapping a compound score to a three-way category.
///
/// Two policies exist because the surrounding tooling historically used both:
/// a wide neutral band and a much narrower one. They are selectable, never
/// silently substituted for one another.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPolicy {
    /// Positive at score >= 0.5, Negative at score <= -0.5.
    #[default]
    Wide,
    /// Positive at score >= 0.05, Negative at score <= -0.05.
    Narrow,
}

impl ThresholdPolicy {
    /// The positive cutoff; the negative cutoff is its negation.
    pub const fn positive_threshold(&self) -> f64 {
        match self {
            ThresholdPolicy::Wide => 0.5,
            ThresholdPolicy::Narrow => 0.05,
        }
    }

    /// Classify a compound score.
    ///
    /// Total over [-1, 1]: boundaries are closed toward the extremes, so the
    /// cutoff value itself maps to Positive (or Negative), never Neutral.
    pub fn classify(&self, score: f64) -> Category {
        let threshold = self.positive_threshold();
        if score >= threshold {
            Category::Positive
        } else if score <= -threshold {
            Category::Negative
        } else {
            Category::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdPolicy::Wide => "wide",
            ThresholdPolicy::Narrow => "narrow",
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ThresholdPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wide" => Ok(ThresholdPolicy::Wide),
            "narrow" => Ok(ThresholdPolicy::Narrow),
            _ => Err(ModelError::UnknownPolicy(s.to_string())),
        }
    }
}
