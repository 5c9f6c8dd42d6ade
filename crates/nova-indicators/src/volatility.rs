//! Volatility indicators.

use nova_core::traits::{Indicator, OhlcIndicator};

/// Rolling volatility of simple daily returns.
///
/// Sample standard deviation (n - 1 denominator) of the last `window`
/// close-to-close returns, so the first value needs `window + 1` closes.
#[derive(Debug, Clone)]
pub struct Volatility {
    window: usize,
}

impl Volatility {
    /// Create a new volatility indicator.
    pub fn new(window: usize) -> Self {
        assert!(window > 1, "Window must be greater than 1");
        Self { window }
    }
}

impl Indicator for Volatility {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.window {
            return vec![];
        }

        let returns: Vec<f64> = data.windows(2).map(|w| w[1] / w[0] - 1.0).collect();
        let window_f64 = self.window as f64;

        returns
            .windows(self.window)
            .map(|window| {
                let mean = window.iter().sum::<f64>() / window_f64;
                let variance =
                    window.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (window_f64 - 1.0);
                variance.sqrt()
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.window + 1
    }

    fn name(&self) -> &str {
        "Volatility"
    }
}

/// Average True Range (ATR).
///
/// Measures market volatility by decomposing the entire range
/// of an asset price for that period.
#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
}

impl Atr {
    /// Create a new ATR indicator.
    ///
    /// Common period is 14.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl OhlcIndicator for Atr {
    type Output = f64;

    fn calculate_ohlc(&self, high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
        let len = high.len().min(low.len()).min(close.len());
        if len < self.period + 1 {
            return vec![];
        }

        // True range needs the previous close, so it starts at bar 1
        let tr: Vec<f64> = (1..len)
            .map(|i| {
                let high_low = high[i] - low[i];
                let high_close = (high[i] - close[i - 1]).abs();
                let low_close = (low[i] - close[i - 1]).abs();
                high_low.max(high_close).max(low_close)
            })
            .collect();

        let period_f64 = self.period as f64;
        let mut result = Vec::with_capacity(tr.len() - self.period + 1);

        // Initial ATR is SMA of first 'period' true ranges
        let mut atr: f64 = tr[..self.period].iter().sum::<f64>() / period_f64;
        result.push(atr);

        // Wilder's smoothing
        for &tr_val in &tr[self.period..] {
            atr = (atr * (period_f64 - 1.0) + tr_val) / period_f64;
            result.push(atr);
        }

        result
    }

    fn period(&self) -> usize {
        self.period + 1
    }

    fn name(&self) -> &str {
        "ATR"
    }
}
