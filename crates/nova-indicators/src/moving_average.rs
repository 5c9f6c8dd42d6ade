//! Moving average indicators.

use nova_core::traits::Indicator;

/// Simple Moving Average (SMA).
///
/// Calculates the arithmetic mean of the last N values.
#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
}

impl Sma {
    /// Create a new SMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Indicator for Sma {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);
        let period_f64 = self.period as f64;

        // Initial sum
        let mut sum: f64 = data[..self.period].iter().sum();
        result.push(sum / period_f64);

        // Sliding window
        for i in self.period..data.len() {
            sum = sum - data[i - self.period] + data[i];
            result.push(sum / period_f64);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "SMA"
    }
}

/// Exponential Moving Average (EMA).
///
/// Gives more weight to recent prices using an exponential decay.
/// The first value is the SMA of the first `period` inputs.
#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    multiplier: f64,
}

impl Ema {
    /// Create a new EMA with the specified period.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        let multiplier = 2.0 / (period as f64 + 1.0);
        Self { period, multiplier }
    }
}

impl Indicator for Ema {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() < self.period {
            return vec![];
        }

        let mut result = Vec::with_capacity(data.len() - self.period + 1);

        // Initialize with SMA
        let initial_sma: f64 = data[..self.period].iter().sum::<f64>() / self.period as f64;
        result.push(initial_sma);

        let mut ema = initial_sma;
        let one_minus_mult = 1.0 - self.multiplier;

        for &price in &data[self.period..] {
            ema = price * self.multiplier + ema * one_minus_mult;
            result.push(ema);
        }

        result
    }

    fn period(&self) -> usize {
        self.period
    }

    fn name(&self) -> &str {
        "EMA"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sma() {
        let sma = Sma::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = sma.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // (1+2+3)/3
        assert!((result[1] - 3.0).abs() < 1e-10); // (2+3+4)/3
        assert!((result[2] - 4.0).abs() < 1e-10); // (3+4+5)/3
    }

    #[test]
    fn test_sma_20_over_twenty_closes() {
        let sma = Sma::new(20);
        let closes: Vec<f64> = (10..30).map(f64::from).collect();
        let aligned = sma.calculate_aligned(&closes);

        assert_eq!(aligned.len(), 20);
        assert!(aligned[..19].iter().all(Option::is_none));
        assert!((aligned[19].unwrap() - 19.5).abs() < 1e-10);
    }

    #[test]
    fn test_sma_insufficient_data() {
        let sma = Sma::new(5);
        let data = vec![1.0, 2.0, 3.0];

        assert!(sma.calculate(&data).is_empty());
        assert_eq!(sma.calculate_aligned(&data), vec![None, None, None]);
    }

    #[test]
    fn test_ema() {
        let ema = Ema::new(3);
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = ema.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 2.0).abs() < 1e-10); // Initial SMA
        // mult = 2/(3+1) = 0.5
        // result[1] = 4 * 0.5 + 2 * 0.5 = 3.0
        assert!((result[1] - 3.0).abs() < 1e-10);
        assert!((result[2] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_ema_50_reference_on_linear_series() {
        // On x[t] = t the SMA seed is 24.5 and EMA lags by (n - 1) / 2 exactly
        let data: Vec<f64> = (0..120).map(|i| i as f64).collect();
        let aligned = Ema::new(50).calculate_aligned(&data);

        assert!(aligned[..49].iter().all(Option::is_none));
        for (t, value) in aligned.iter().enumerate().skip(49) {
            assert!((value.unwrap() - (t as f64 - 24.5)).abs() < 1e-9, "ema[{}]", t);
        }
    }

    #[test]
    fn test_ema_warmup() {
        let ema = Ema::new(50);
        let data: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
        let aligned = ema.calculate_aligned(&data);

        assert_eq!(ema.warmup(), 49);
        assert!(aligned[48].is_none());
        assert!(aligned[49].is_some());
    }
}
