//! Category frequency chart data, shared by the bar, pie and donut views.

use serde::Serialize;

use senti_model::{Category, CategoryBreakdown};

/// Hole fraction the donut variant cuts out of the pie.
pub const DONUT_HOLE_RATIO: f64 = 0.5;

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryChart {
    pub slices: Vec<CategorySlice>,
    pub total: usize,
}

/// Build the slices in fixed enum order, skipping absent categories.
///
/// An empty breakdown yields an empty chart; renderers must treat that as a
/// chart with no data, not an error.
pub fn build_category_chart(breakdown: &CategoryBreakdown) -> CategoryChart {
    let slices = Category::ALL
        .iter()
        .filter_map(|category| {
            let count = breakdown.count(*category);
            if count == 0 {
                return None;
            }
            Some(CategorySlice {
                category: *category,
                label: category.as_str(),
                count,
                percent: breakdown.percent(*category),
            })
        })
        .collect();
    CategoryChart {
        slices,
        total: breakdown.total,
    }
}
