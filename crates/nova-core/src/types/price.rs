//! Daily OHLCV (Open, High, Low, Close, Volume) price data.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DataError;

/// One trading day of prices for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    /// Ticker symbol
    pub ticker: String,
    /// Trading date
    pub date: NaiveDate,
    /// Opening price
    pub open: f64,
    /// Highest price
    pub high: f64,
    /// Lowest price
    pub low: f64,
    /// Closing price
    pub close: f64,
    /// Trading volume
    pub volume: f64,
}

impl PriceBar {
    /// Create a new bar.
    pub fn new(
        ticker: impl Into<String>,
        date: NaiveDate,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
    ) -> Self {
        Self {
            ticker: ticker.into(),
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }
}

/// Date-ordered price history for a single ticker.
///
/// Dates are strictly increasing: no two bars share a date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSeries {
    /// Ticker symbol
    pub ticker: String,
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Create a series, rejecting bars whose dates are not strictly increasing.
    pub fn new(ticker: impl Into<String>, bars: Vec<PriceBar>) -> Result<Self, DataError> {
        let ticker = ticker.into();
        if let Some(pair) = bars.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(DataError::UnorderedBars {
                ticker,
                date: pair[1].date.to_string(),
            });
        }
        Ok(Self { ticker, bars })
    }

    /// Create an empty series.
    pub fn empty(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            bars: Vec::new(),
        }
    }

    /// Get the number of bars.
    #[inline]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Check if the series is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Get all bars as a slice.
    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    /// Get the last bar.
    pub fn last(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// Extract trading dates.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Extract close prices as a vector.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Extract high prices as a vector.
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Extract low prices as a vector.
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// Get an iterator over the bars.
    pub fn iter(&self) -> impl Iterator<Item = &PriceBar> {
        self.bars.iter()
    }
}
