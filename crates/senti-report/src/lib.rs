pub mod boxplot;
pub mod category;
pub mod histogram;
pub mod json;
pub mod pareto;
pub mod scatter;
pub mod stars;
pub mod stemleaf;

pub use boxplot::{BoxStats, build_box_plots};
pub use category::{CategoryChart, CategorySlice, DONUT_HOLE_RATIO, build_category_chart};
pub use histogram::{
    Histogram, HistogramBin, HistogramOptions, PolygonPoint, build_frequency_polygon,
    build_histogram,
};
pub use json::{AnalysisReport, write_analysis_report};
pub use pareto::{ParetoChart, build_pareto_chart};
pub use scatter::{PictographSymbol, ScatterPoint, build_scatter_series};
pub use stars::{StarChart, StarCount, build_star_chart};
pub use stemleaf::{StemLeafLine, StemLeafPlot, build_stem_leaf};
