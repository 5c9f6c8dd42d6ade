//! Core types and traits for the news analytics toolkit.
//!
//! This crate provides the foundational building blocks including:
//! - Input records (HeadlineRecord, PriceBar, PriceSeries)
//! - Derived records (IndicatorSeries, DailySentiment, CorrelationResult)
//! - The indicator traits shared by every technical indicator
//! - Error types for each stage of the pipeline

pub mod types;
pub mod traits;
pub mod error;

pub use error::{NovaError, NovaResult};
pub use types::*;
pub use traits::*;
