//! Service layer: loading, filtering and the derived chart data.
//!
//! Everything here is UI-independent. The dashboard, the CLI and the web API
//! all call these functions with explicit widget state.

pub mod aggregate;
pub mod artwork;
pub mod columns;
pub mod compare;
pub mod filter;
pub mod loader;
pub mod memo;
pub mod scatter;

// Re-export commonly used types and functions
pub use aggregate::{aggregate_types, AggregateRow, TypeDistribution};
pub use artwork::artwork_url;
pub use compare::{compare, resolve, CompareError, Comparison, ComparisonRow};
pub use filter::{filter_by_generation, FilterWarning, GenerationFilter};
pub use loader::{DataError, DataSource, DatasetCache};
pub use memo::Memo;
pub use scatter::{build_scatter, ScatterPlot, ScatterPoint, ScatterSeries};
