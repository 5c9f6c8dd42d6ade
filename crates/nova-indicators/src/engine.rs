//! Indicator engine: the full indicator set over one ticker's price series.

use chrono::NaiveDate;
use nova_core::error::IndicatorError;
use nova_core::traits::{Indicator, MultiOutputIndicator, OhlcIndicator};
use nova_core::types::{IndicatorSeries, PriceSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::momentum::{Growth, Macd, Rsi};
use crate::moving_average::{Ema, Sma};
use crate::volatility::{Atr, Volatility};

/// Window lengths for every indicator the engine computes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub atr_period: usize,
    pub growth_sessions: usize,
    pub volatility_window: usize,
    pub moving_average_window: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: 20,
            ema_period: 50,
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            atr_period: 14,
            growth_sessions: 5,
            volatility_window: 20,
            moving_average_window: 10,
        }
    }
}

impl IndicatorParams {
    /// Check that every window is usable.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        let windows = [
            ("sma_period", self.sma_period),
            ("ema_period", self.ema_period),
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("atr_period", self.atr_period),
            ("growth_sessions", self.growth_sessions),
            ("moving_average_window", self.moving_average_window),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, value)| *value == 0) {
            return Err(IndicatorError::InvalidParameter(format!(
                "{} must be greater than 0",
                name
            )));
        }
        if self.volatility_window < 2 {
            return Err(IndicatorError::InvalidParameter(
                "volatility_window must be at least 2".to_string(),
            ));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(IndicatorError::InvalidParameter(format!(
                "macd_fast ({}) must be less than macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        Ok(())
    }

    pub fn sma_column(&self) -> String {
        format!("SMA_{}", self.sma_period)
    }

    pub fn ema_column(&self) -> String {
        format!("EMA_{}", self.ema_period)
    }

    pub fn rsi_column(&self) -> String {
        format!("RSI_{}", self.rsi_period)
    }

    pub fn atr_column(&self) -> String {
        format!("ATR_{}", self.atr_period)
    }

    pub fn growth_column(&self) -> String {
        format!("PN_GROWTH_{}", self.growth_sessions)
    }

    pub fn volatility_column(&self) -> String {
        format!("PN_VOL_{}", self.volatility_window)
    }

    pub fn moving_average_column(&self) -> String {
        format!("PN_MOVAVE_{}", self.moving_average_window)
    }
}

pub const MACD_COLUMN: &str = "MACD";
pub const MACD_SIGNAL_COLUMN: &str = "MACD_SIGNAL";
pub const MACD_HIST_COLUMN: &str = "MACD_HIST";

/// Latest fully-defined indicator row for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSummary {
    pub ticker: String,
    /// Date of the summarized row, `None` if no row is complete
    pub date: Option<NaiveDate>,
    pub close: Option<f64>,
    /// `(metric name, value)` pairs in report order
    pub metrics: Vec<(String, Option<f64>)>,
}

impl TechnicalSummary {
    /// Value of a metric by name.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| *v)
    }
}

/// Computes the indicator set over price series.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    params: IndicatorParams,
}

impl IndicatorEngine {
    /// Create an engine after validating the parameters.
    pub fn new(params: IndicatorParams) -> Result<Self, IndicatorError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &IndicatorParams {
        &self.params
    }

    /// Bars needed before every column has at least one value.
    fn min_history(&self) -> usize {
        let p = &self.params;
        [
            Sma::new(p.sma_period).period(),
            Ema::new(p.ema_period).period(),
            Rsi::new(p.rsi_period).period(),
            Macd::with_periods(p.macd_fast, p.macd_slow, p.macd_signal).period(),
            Atr::new(p.atr_period).period(),
            Growth::new(p.growth_sessions).period(),
            Volatility::new(p.volatility_window).period(),
            Sma::new(p.moving_average_window).period(),
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }

    /// Compute every indicator, aligned to the series dates.
    ///
    /// Short or empty series produce all-missing columns, never an error.
    pub fn compute(&self, series: &PriceSeries) -> IndicatorSeries {
        let p = &self.params;
        let closes = series.closes();
        let highs = series.highs();
        let lows = series.lows();

        let mut out = IndicatorSeries::new(series.ticker.clone(), series.dates());

        let required = self.min_history();
        if closes.len() < required {
            debug!(
                ticker = %series.ticker,
                bars = closes.len(),
                required,
                "History shorter than the longest warm-up"
            );
        }

        out.push_column(p.sma_column(), Sma::new(p.sma_period).calculate_aligned(&closes));
        out.push_column(p.ema_column(), Ema::new(p.ema_period).calculate_aligned(&closes));
        out.push_column(p.rsi_column(), Rsi::new(p.rsi_period).calculate_aligned(&closes));

        let macd = Macd::with_periods(p.macd_fast, p.macd_slow, p.macd_signal)
            .calculate_aligned(&closes);
        out.push_column(MACD_COLUMN, macd.iter().map(|m| m.map(|m| m.macd)).collect());
        out.push_column(
            MACD_SIGNAL_COLUMN,
            macd.iter().map(|m| m.map(|m| m.signal)).collect(),
        );
        out.push_column(
            MACD_HIST_COLUMN,
            macd.iter().map(|m| m.map(|m| m.histogram)).collect(),
        );

        out.push_column(
            p.atr_column(),
            Atr::new(p.atr_period).calculate_ohlc_aligned(&highs, &lows, &closes),
        );
        out.push_column(
            p.growth_column(),
            Growth::new(p.growth_sessions).calculate_aligned(&closes),
        );
        out.push_column(
            p.volatility_column(),
            Volatility::new(p.volatility_window).calculate_aligned(&closes),
        );
        out.push_column(
            p.moving_average_column(),
            Sma::new(p.moving_average_window).calculate_aligned(&closes),
        );

        out
    }

    /// Summarize the last row on which every indicator is defined.
    pub fn summarize(&self, series: &PriceSeries, indicators: &IndicatorSeries) -> TechnicalSummary {
        let p = &self.params;
        let names = [
            p.sma_column(),
            p.ema_column(),
            p.rsi_column(),
            MACD_HIST_COLUMN.to_string(),
            p.atr_column(),
            p.growth_column(),
            p.volatility_column(),
        ];
        let row = indicators.last_complete_row();

        TechnicalSummary {
            ticker: series.ticker.clone(),
            date: row.map(|i| indicators.dates[i]),
            close: row.and_then(|i| series.bars().get(i)).map(|b| b.close),
            metrics: names
                .iter()
                .map(|name| {
                    let value = row.and_then(|i| indicators.value(name, i));
                    (name.to_lowercase(), value)
                })
                .collect(),
        }
    }
}
