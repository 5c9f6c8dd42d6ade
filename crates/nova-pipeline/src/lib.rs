//! Batch pipelines over the headline and price datasets.
//!
//! Each run is a fresh, synchronous pass: load inputs, compute, write the
//! output files and return a report for the console.

pub mod correlation;
pub mod eda;
pub mod report;
pub mod technicals;

pub use correlation::run_correlation;
pub use eda::run_eda;
pub use report::{CorrelationReport, EdaReport, TechnicalsReport, TickerRun};
pub use technicals::{load_price_universe, run_technicals};
