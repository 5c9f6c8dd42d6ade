//! Correlation of daily headline sentiment with daily stock returns.

pub mod engine;
pub mod returns;

pub use engine::{pearson, CorrelationEngine, CorrelationParams};
pub use returns::{daily_returns, inner_join};
