//! Type definitions for mktdash

mod dataset;
mod error;
mod metrics;

pub use dataset::*;
pub use error::*;
pub use metrics::*;
