//! Pareto chart data: frequency bars with a cumulative-percentage overlay.

use serde::Serialize;

use senti_model::{CategoryBreakdown, ParetoEntry};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ParetoChart {
    /// Ranked by count descending; cumulative percentages run over this
    /// order and end at 100 for non-empty data.
    pub entries: Vec<ParetoEntry>,
}

pub fn build_pareto_chart(breakdown: &CategoryBreakdown) -> ParetoChart {
    ParetoChart {
        entries: breakdown.pareto(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use senti_model::Category;

    #[test]
    fn cumulative_ends_at_one_hundred() {
        let mut breakdown = CategoryBreakdown::default();
        breakdown.insert(Category::Positive, 5, 9);
        breakdown.insert(Category::Neutral, 3, 9);
        breakdown.insert(Category::Negative, 1, 9);

        let chart = build_pareto_chart(&breakdown);
        assert_eq!(chart.entries.len(), 3);
        assert_eq!(chart.entries[0].category, Category::Positive);
        assert!(
            chart
                .entries
                .windows(2)
                .all(|pair| pair[0].count >= pair[1].count)
        );
        assert!((chart.entries.last().unwrap().cumulative_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn empty_breakdown_yields_empty_chart() {
        let chart = build_pareto_chart(&CategoryBreakdown::default());
        assert!(chart.entries.is_empty());
    }
}
