pub mod aggregate;
pub mod error;
pub mod frame;
pub mod pipeline;
pub mod stats;

pub use aggregate::{ValueCount, aggregate_categories, aggregate_stars, column_value_counts};
pub use error::{CoreError, Result};
pub use frame::{AnalysisFrame, build_analysis_frame};
pub use pipeline::{AnalysisRequest, AnalysisResult, analyze_table};
pub use stats::score_stats;
