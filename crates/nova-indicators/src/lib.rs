//! Technical indicators over daily price series.
//!
//! This crate provides the indicators computed for every ticker:
//! - Moving averages (SMA, EMA)
//! - Momentum indicators (RSI, MACD, growth ratio)
//! - Volatility indicators (ATR, rolling return volatility)
//!
//! [`IndicatorEngine`] runs the full set over a [`nova_core::PriceSeries`]
//! and returns a date-aligned [`nova_core::IndicatorSeries`].

pub mod engine;
pub mod momentum;
pub mod moving_average;
pub mod volatility;

pub use engine::{IndicatorEngine, IndicatorParams, TechnicalSummary};
pub use momentum::{Growth, Macd, MacdOutput, Rsi};
pub use moving_average::{Ema, Sma};
pub use volatility::{Atr, Volatility};
