//! Stem-and-leaf display of compound scores.
//!
//! Scores are scaled to integer cents (score * 100, truncated). The stem is
//! cents / 10 and the leaf is |cents| % 10, so a score of -0.73 renders as
//! stem -7, leaf 3. Cents in (-10, 0) share the signed zero stem "-0",
//! keeping it distinct from the non-negative zero stem.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StemLeafLine {
    /// Display stem, e.g. "-7", "-0", "0", "9".
    pub stem: String,
    /// Sorted ascending.
    pub leaves: Vec<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StemLeafPlot {
    /// Multiplier applied to scores before splitting into stem and leaf.
    pub scale: i32,
    pub lines: Vec<StemLeafLine>,
}

/// Build the plot with stems ascending. Empty input yields no lines.
pub fn build_stem_leaf(scores: &[f64]) -> StemLeafPlot {
    // Key stems so that -0 sorts between -1 and 0.
    let mut grouped: std::collections::BTreeMap<(i32, bool), Vec<u8>> =
        std::collections::BTreeMap::new();
    for score in scores {
        let cents = (score * 100.0).trunc() as i32;
        let stem = cents / 10;
        let leaf = (cents % 10).unsigned_abs() as u8;
        let negative_zero = stem == 0 && (cents < 0 || score.is_sign_negative() && cents == 0);
        grouped
            .entry((stem, !negative_zero))
            .or_default()
            .push(leaf);
    }

    let lines = grouped
        .into_iter()
        .map(|((stem, positive), mut leaves)| {
            leaves.sort_unstable();
            let stem = if stem == 0 && !positive {
                "-0".to_string()
            } else {
                stem.to_string()
            };
            StemLeafLine { stem, leaves }
        })
        .collect();

    StemLeafPlot { scale: 100, lines }
}
