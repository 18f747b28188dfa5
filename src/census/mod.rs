//! Census module - extraction, tallying, ranking and grouped reporting.
//!
//! This module provides the core data-processing chain of the tool:
//! - **Extraction**: per-line field parsing via [`extract`]
//! - **Tally**: per-archive counts and the length statistic via [`ProductTally`]
//! - **Report**: grouped text output via [`report`]
//! - **Pipeline**: sequential executor via [`pipeline::CensusPipeline`]

pub mod extract;
pub mod pipeline;
pub mod report;
pub mod tally;

// Re-export commonly used types
pub use extract::{archive_identifier, extract, product_string, Record};
pub use pipeline::{CensusError, CensusPipeline, CensusReport, CensusStats};
pub use report::{render_report, write_report};
pub use tally::ProductTally;
