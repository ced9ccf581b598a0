//! Services for aggregation, trends, and period derivation

pub mod aggregator;
pub mod data_loader;
pub mod insights;
pub mod selection;
pub mod trend;

pub use aggregator::Aggregator;
pub use data_loader::load_dataset;
pub use selection::{PeriodView, Resolver, Selection};
pub use trend::{Trend, TrendDirection};
