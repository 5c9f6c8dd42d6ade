//! Core traits for the analytics pipeline.

mod indicator;

pub use indicator::{Indicator, MultiOutputIndicator, OhlcIndicator};
