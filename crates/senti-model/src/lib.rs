pub mod category;
pub mod error;
pub mod ids;
pub mod policy;
pub mod record;
pub mod scorer;
pub mod summary;
pub mod table;

pub use category::{Category, StarRating};
pub use error::{ModelError, Result};
pub use ids::RowId;
pub use policy::ThresholdPolicy;
pub use record::ScoredRecord;
pub use scorer::Scorer;
pub use summary::{
    CategoryBreakdown, CategorySummary, ParetoEntry, ScoreStats, StarBreakdown,
};
pub use table::{CellValue, DataTable, SourceRow};
