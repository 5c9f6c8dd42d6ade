//! Momentum indicators.

use nova_core::traits::{Indicator, MultiOutputIndicator};
use serde::{Deserialize, Serialize};

use crate::moving_average::Ema;

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }

    /// Calculate using Wilder's smoothing method.
    fn wilder_smooth(values: &[f64], period: usize) -> Vec<f64> {
        if values.len() < period {
            return vec![];
        }

        let mut result = Vec::with_capacity(values.len() - period + 1);
        let period_f64 = period as f64;

        let mut avg: f64 = values[..period].iter().sum::<f64>() / period_f64;
        result.push(avg);

        // avg = (prev_avg * (period-1) + value) / period
        for &value in &values[period..] {
            avg = (avg * (period_f64 - 1.0) + value) / period_f64;
            result.push(avg);
        }

        result
    }
}

impl Indicator for Rsi {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.period {
            return vec![];
        }

        let (gains, losses): (Vec<f64>, Vec<f64>) = data
            .windows(2)
            .map(|w| {
                let change = w[1] - w[0];
                if change > 0.0 {
                    (change, 0.0)
                } else {
                    (0.0, -change)
                }
            })
            .unzip();

        let avg_gains = Self::wilder_smooth(&gains, self.period);
        let avg_losses = Self::wilder_smooth(&losses, self.period);

        avg_gains
            .iter()
            .zip(avg_losses.iter())
            .map(|(&gain, &loss)| {
                let total = gain + loss;
                // Flat window: no movement in either direction reads as zero
                if total == 0.0 {
                    0.0
                } else {
                    100.0 * gain / total
                }
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// MACD (Moving Average Convergence Divergence) output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacdOutput {
    /// MACD line (fast EMA - slow EMA)
    pub macd: f64,
    /// Signal line (EMA of MACD)
    pub signal: f64,
    /// Histogram (MACD - Signal)
    pub histogram: f64,
}

/// MACD indicator.
///
/// Uses two EMAs to identify trend direction and momentum.
#[derive(Debug, Clone)]
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Macd {
    /// Create a new MACD with default parameters (12, 26, 9).
    pub fn new() -> Self {
        Self::with_periods(12, 26, 9)
    }

    /// Create a MACD with custom periods.
    pub fn with_periods(fast: usize, slow: usize, signal: usize) -> Self {
        assert!(fast > 0 && slow > 0 && signal > 0);
        assert!(fast < slow, "Fast period must be less than slow period");
        Self {
            fast_period: fast,
            slow_period: slow,
            signal_period: signal,
        }
    }
}

impl Default for Macd {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiOutputIndicator for Macd {
    type Outputs = MacdOutput;

    fn calculate(&self, data: &[f64]) -> Vec<MacdOutput> {
        if data.len() < self.period() {
            return vec![];
        }

        // Both EMAs are seeded on the window ending at the slow lookback
        let offset = self.slow_period - self.fast_period;
        let fast_ema = Ema::new(self.fast_period).calculate(&data[offset..]);
        let slow_ema = Ema::new(self.slow_period).calculate(data);

        let macd_line: Vec<f64> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| f - s)
            .collect();

        let signal_line = Ema::new(self.signal_period).calculate(&macd_line);

        let offset = self.signal_period - 1;
        macd_line[offset..]
            .iter()
            .zip(signal_line.iter())
            .map(|(&macd, &signal)| MacdOutput {
                macd,
                signal,
                histogram: macd - signal,
            })
            .collect()
    }

    fn period(&self) -> usize {
        self.slow_period + self.signal_period - 1
    }

    fn name(&self) -> &str {
        "MACD"
    }
}

/// Growth ratio over a fixed number of sessions: `close[t] / close[t - n]`.
#[derive(Debug, Clone)]
pub struct Growth {
    sessions: usize,
}

impl Growth {
    /// Create a growth indicator looking back `sessions` bars.
    pub fn new(sessions: usize) -> Self {
        assert!(sessions > 0, "Sessions must be greater than 0");
        Self { sessions }
    }
}

impl Indicator for Growth {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.sessions {
            return vec![];
        }

        data[self.sessions..]
            .iter()
            .zip(data.iter())
            .map(|(&current, &past)| current / past)
            .collect()
    }

    fn period(&self) -> usize {
        self.sessions + 1
    }

    fn name(&self) -> &str {
        "Growth"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_basic() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..30)
            .map(|i| 100.0 + (i as f64 * 0.5).sin() * 5.0)
            .collect();

        let result = rsi.calculate(&data);
        assert_eq!(result.len(), data.len() - 14);

        for value in &result {
            assert!(*value >= 0.0 && *value <= 100.0);
        }
    }

    #[test]
    fn test_rsi_all_gains() {
        let rsi = Rsi::new(5);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let result = rsi.calculate(&data);

        assert!(!result.is_empty());
        assert!((result[0] - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_rsi_all_losses() {
        let rsi = Rsi::new(5);
        let data = vec![7.0, 6.0, 5.0, 4.0, 3.0, 2.0, 1.0];
        let result = rsi.calculate(&data);

        assert!(!result.is_empty());
        assert!(result[0].abs() < 1e-10);
    }

    #[test]
    fn test_rsi_flat_prices_read_zero() {
        let rsi = Rsi::new(3);
        let result = rsi.calculate(&[5.0; 6]);
        assert_eq!(result.len(), 3);
        assert!(result.iter().all(|v| v.abs() < 1e-10));
    }

    #[test]
    fn test_rsi_warmup() {
        let rsi = Rsi::new(14);
        let data: Vec<f64> = (0..20).map(|i| 10.0 + (i % 3) as f64).collect();
        let aligned = rsi.calculate_aligned(&data);

        assert_eq!(aligned.len(), 20);
        assert!(aligned[..14].iter().all(Option::is_none));
        assert!(aligned[14].is_some());
    }

    #[test]
    fn test_macd_basic() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..50).map(|i| 100.0 + i as f64).collect();
        let result = macd.calculate(&data);

        assert_eq!(result.len(), 50 - 33);
        // In an uptrend, MACD should be positive
        assert!(result.last().unwrap().macd > 0.0);
        for output in &result {
            assert!((output.histogram - (output.macd - output.signal)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_macd_first_value_at_lookback() {
        let macd = Macd::new();
        let data: Vec<f64> = (0..34).map(|i| 50.0 + (i as f64 * 0.3).cos()).collect();
        let aligned = macd.calculate_aligned(&data);

        assert_eq!(macd.warmup(), 33);
        assert!(aligned[..33].iter().all(Option::is_none));
        assert!(aligned[33].is_some());

        assert!(macd.calculate(&data[..33]).is_empty());
    }

    fn sine_trend(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + 0.5 * i as f64 + 5.0 * (i as f64 / 3.0).sin())
            .collect()
    }

    #[test]
    fn test_macd_reference_values() {
        // TA-Lib seeding: fast EMA from mean(close[14..=25]), slow from
        // mean(close[0..=25]), signal from mean(macd[25..=33])
        let data = sine_trend(60);
        let aligned = Macd::new().calculate_aligned(&data);

        let expected = [
            (33, 2.17802492762695, 2.96664913220257, -0.78862420457562),
            (34, 2.0374192897516963, 2.7808031637123953, -0.743383873960699),
            (59, 3.6059140817164206, 3.041239287448769, 0.5646747942676518),
        ];
        for (i, macd, signal, hist) in expected {
            let out = aligned[i].unwrap();
            assert!((out.macd - macd).abs() < 1e-9, "macd[{}] = {}", i, out.macd);
            assert!((out.signal - signal).abs() < 1e-9, "signal[{}] = {}", i, out.signal);
            assert!((out.histogram - hist).abs() < 1e-9, "hist[{}] = {}", i, out.histogram);
        }
    }

    #[test]
    fn test_macd_fast_seed_ignores_early_closes() {
        // Closes before index 14 only reach MACD through the slow EMA
        let data = sine_trend(40);
        let mut bumped = data.clone();
        bumped[3] += 10.0;
        let base = Macd::new().calculate(&data);
        let shifted = Macd::new().calculate(&bumped);
        assert_eq!(shifted.len(), base.len());

        // Slow seed moves by 10 / 26; the fast EMA is untouched
        let slow_k: f64 = 2.0 / 27.0;
        let decay = (1.0 - slow_k).powi(8);
        let delta = base[0].macd - shifted[0].macd;
        assert!((delta - 10.0 / 26.0 * decay).abs() < 1e-9, "{}", delta);
    }

    #[test]
    fn test_growth() {
        let growth = Growth::new(5);
        let data = vec![10.0, 11.0, 12.0, 13.0, 14.0, 20.0, 22.0];
        let aligned = growth.calculate_aligned(&data);

        assert!(aligned[..5].iter().all(Option::is_none));
        assert!((aligned[5].unwrap() - 2.0).abs() < 1e-10);
        assert!((aligned[6].unwrap() - 2.0).abs() < 1e-10);
    }
}
