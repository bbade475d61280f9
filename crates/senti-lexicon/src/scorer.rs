#![deny(unsafe_code)]

use senti_model::Scorer;

use crate::error::LexiconError;
use crate::lexicon::Lexicon;

/// Flat intensity added (or removed) by a booster word, scaled by distance.
const BOOSTER_STEP: f64 = 0.293;
/// Valence multiplier applied when a negation precedes a valenced token.
const NEGATION_FACTOR: f64 = -0.74;
/// Emphasis added per exclamation mark, capped at `MAX_EXCLAMATIONS`.
const EXCLAMATION_STEP: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 4;
/// Normalization constant for mapping summed valences into [-1, 1].
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Distance decay for boosters one, two and three tokens back.
const LOOKBACK_DECAY: [f64; 3] = [1.0, 0.95, 0.9];

/// Words that intensify the valence of the token that follows them.
static INTENSIFIERS: &[&str] = &[
    "absolutely",
    "amazingly",
    "completely",
    "considerably",
    "decidedly",
    "deeply",
    "enormously",
    "entirely",
    "especially",
    "exceptionally",
    "extremely",
    "highly",
    "hugely",
    "incredibly",
    "majorly",
    "particularly",
    "purely",
    "really",
    "remarkably",
    "so",
    "substantially",
    "thoroughly",
    "totally",
    "tremendously",
    "truly",
    "unbelievably",
    "unusually",
    "utterly",
    "very",
];

/// Words that dampen the valence of the token that follows them.
static DAMPENERS: &[&str] = &[
    "almost",
    "barely",
    "hardly",
    "kinda",
    "less",
    "marginally",
    "occasionally",
    "partly",
    "scarcely",
    "slightly",
    "somewhat",
];

/// Negations flip and damp valence within a three-token window.
static NEGATIONS: &[&str] = &[
    "aint", "arent", "cannot", "cant", "couldnt", "darent", "didnt", "doesnt", "dont", "hadnt",
    "hasnt", "havent", "isnt", "mightnt", "mustnt", "neither", "never", "no", "none", "nope",
    "nor", "not", "nothing", "nowhere", "shouldnt", "wasnt", "werent", "without", "wont",
    "wouldnt",
];

/// Lexicon/rule sentiment model.
///
/// Deterministic and side-effect free: the lexicon is parsed once at
/// construction and treated as immutable shared configuration afterwards.
#[derive(Debug, Clone)]
pub struct SentimentModel {
    lexicon: Lexicon,
}

/// Full score breakdown for one text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScores {
    /// Compound polarity in [-1, 1].
    pub compound: f64,
    /// Share of positive valence mass, 0-1.
    pub positive: f64,
    /// Share of negative valence mass, 0-1.
    pub negative: f64,
    /// Share of neutral (valence-free) tokens, 0-1.
    pub neutral: f64,
}

impl SentimentScores {
    const ZERO: SentimentScores = SentimentScores {
        compound: 0.0,
        positive: 0.0,
        negative: 0.0,
        neutral: 0.0,
    };
}

impl SentimentModel {
    /// Load the model with the embedded lexicon.
    pub fn load() -> Result<Self, LexiconError> {
        Ok(Self {
            lexicon: Lexicon::embedded()?,
        })
    }

    /// Build a model over a custom lexicon.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Score a text, returning the compound polarity plus mass proportions.
    ///
    /// Empty or whitespace-only text scores zero across the board.
    pub fn analyze(&self, text: &str) -> SentimentScores {
        if text.trim().is_empty() {
            return SentimentScores::ZERO;
        }

        let tokens = tokenize(text);
        let exclamations = text
            .chars()
            .filter(|c| *c == '!')
            .count()
            .min(MAX_EXCLAMATIONS);

        let mut valences: Vec<f64> = Vec::new();
        let mut neutral_count = 0usize;
        for (idx, token) in tokens.iter().enumerate() {
            let Some(base) = self.lexicon.valence(token) else {
                if !is_modifier(token) {
                    neutral_count += 1;
                }
                continue;
            };
            valences.push(contextual_valence(base, idx, &tokens));
        }

        let mut sum: f64 = valences.iter().sum();
        let emphasis = exclamations as f64 * EXCLAMATION_STEP;
        if sum > 0.0 {
            sum += emphasis;
        } else if sum < 0.0 {
            sum -= emphasis;
        }

        let positive_mass: f64 = valences.iter().filter(|v| **v > 0.0).map(|v| v + 1.0).sum();
        let negative_mass: f64 = valences
            .iter()
            .filter(|v| **v < 0.0)
            .map(|v| v.abs() + 1.0)
            .sum();
        let neutral_mass = neutral_count as f64;
        let total_mass = positive_mass + negative_mass + neutral_mass;

        let (positive, negative, neutral) = if total_mass > 0.0 {
            (
                positive_mass / total_mass,
                negative_mass / total_mass,
                neutral_mass / total_mass,
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        SentimentScores {
            compound: normalize(sum),
            positive,
            negative,
            neutral,
        }
    }
}

impl Scorer for SentimentModel {
    fn score(&self, text: &str) -> f64 {
        self.analyze(text).compound
    }
}

/// Apply booster and negation context from the preceding window to a base
/// valence.
fn contextual_valence(base: f64, idx: usize, tokens: &[String]) -> f64 {
    let mut valence = base;

    let mut boost = 0.0;
    for (distance, decay) in LOOKBACK_DECAY.iter().enumerate() {
        let Some(prior_idx) = idx.checked_sub(distance + 1) else {
            break;
        };
        let prior = tokens[prior_idx].as_str();
        if INTENSIFIERS.contains(&prior) {
            boost += BOOSTER_STEP * decay;
        } else if DAMPENERS.contains(&prior) {
            boost -= BOOSTER_STEP * decay;
        }
    }
    if boost != 0.0 {
        valence += valence.signum() * boost;
    }

    let negated = (1..=LOOKBACK_DECAY.len()).any(|distance| {
        idx.checked_sub(distance)
            .map(|prior_idx| NEGATIONS.contains(&tokens[prior_idx].as_str()))
            .unwrap_or(false)
    });
    if negated {
        valence *= NEGATION_FACTOR;
    }

    valence
}

/// Map a valence sum into [-1, 1].
fn normalize(sum: f64) -> f64 {
    let normalized = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    normalized.clamp(-1.0, 1.0)
}

/// Lowercased tokens with edge punctuation stripped and apostrophes removed,
/// so contractions match the negation table ("don't" -> "dont").
fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|raw| {
            let trimmed = raw.trim_matches(|c: char| !c.is_alphanumeric());
            if trimmed.is_empty() {
                return None;
            }
            let token: String = trimmed
                .chars()
                .filter(|c| *c != '\'' && *c != '\u{2019}')
                .collect::<String>()
                .to_lowercase();
            if token.is_empty() { None } else { Some(token) }
        })
        .collect()
}

fn is_modifier(token: &str) -> bool {
    INTENSIFIERS.contains(&token) || DAMPENERS.contains(&token) || NEGATIONS.contains(&token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SentimentModel {
        SentimentModel::load().expect("load embedded model")
    }

    #[test]
    fn positive_text_scores_positive() {
        let scores = model().analyze("great product!");
        assert!(scores.compound >= 0.5, "compound = {}", scores.compound);
        assert!(scores.positive > scores.negative);
    }

    #[test]
    fn negative_text_scores_negative() {
        let scores = model().analyze("terrible, awful");
        assert!(scores.compound <= -0.5, "compound = {}", scores.compound);
        assert!(scores.negative > scores.positive);
    }

    #[test]
    fn mild_text_stays_in_the_neutral_band() {
        let scores = model().analyze("it's ok");
        assert!(
            scores.compound > -0.5 && scores.compound < 0.5,
            "compound = {}",
            scores.compound
        );
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(model().analyze(""), SentimentScores::ZERO);
        assert_eq!(model().analyze("   \t "), SentimentScores::ZERO);
    }

    #[test]
    fn intensifier_amplifies() {
        let m = model();
        let plain = m.score("good");
        let boosted = m.score("very good");
        assert!(boosted > plain);
    }

    #[test]
    fn dampener_attenuates() {
        let m = model();
        let plain = m.score("good");
        let damped = m.score("slightly good");
        assert!(damped < plain);
        assert!(damped > 0.0);
    }

    #[test]
    fn negation_flips_polarity() {
        let m = model();
        assert!(m.score("good") > 0.0);
        assert!(m.score("not good") < 0.0);
        assert!(m.score("don't like it") < 0.0);
    }

    #[test]
    fn exclamations_add_emphasis() {
        let m = model();
        let plain = m.score("good");
        let emphatic = m.score("good!!!");
        assert!(emphatic > plain);
    }

    #[test]
    fn scoring_is_deterministic() {
        let m = model();
        let text = "an absolutely wonderful experience, highly recommended!";
        assert_eq!(m.score(text), m.score(text));
    }

    #[test]
    fn unknown_words_are_neutral() {
        let scores = model().analyze("the quarterly widget flange");
        assert_eq!(scores.compound, 0.0);
        assert!((scores.neutral - 1.0).abs() < 1e-12);
    }

    #[test]
    fn punctuation_only_text_scores_zero() {
        assert_eq!(model().score("?!?!"), 0.0);
    }
}
