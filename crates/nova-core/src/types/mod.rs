//! Core data types for the analytics pipeline.

mod correlation;
mod headline;
mod indicator_series;
mod price;
mod sentiment;

pub use correlation::CorrelationResult;
pub use headline::{HeadlineRecord, NOT_EMAIL};
pub use indicator_series::{IndicatorColumn, IndicatorSeries};
pub use price::{PriceBar, PriceSeries};
pub use sentiment::{DailySentiment, SentimentScore};
