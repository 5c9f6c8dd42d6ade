//! Indicator trait definitions.

/// Left-pad a compact indicator output with `None` so it lines up with `len` inputs.
fn align<T: Copy>(compact: Vec<T>, len: usize) -> Vec<Option<T>> {
    let missing = len.saturating_sub(compact.len());
    let mut aligned = Vec::with_capacity(len);
    aligned.resize(missing, None);
    aligned.extend(compact.into_iter().map(Some));
    aligned
}

/// Trait for technical indicators over a single price column.
///
/// `calculate` returns only the defined values (the first one corresponds to
/// input index `warmup()`); `calculate_aligned` returns one entry per input.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output: Copy;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically closes), oldest first
    ///
    /// # Returns
    /// A vector of defined indicator values, empty when data is too short
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Number of leading inputs that produce no value.
    fn warmup(&self) -> usize {
        self.period() - 1
    }

    /// Calculate values aligned to the input, `None` until the window is full.
    fn calculate_aligned(&self, data: &[f64]) -> Vec<Option<Self::Output>> {
        align(self.calculate(data), data.len())
    }
}

/// Multi-output indicator (e.g. MACD).
///
/// Some indicators produce multiple related values.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs: Copy;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Number of leading inputs that produce no value.
    fn warmup(&self) -> usize {
        self.period() - 1
    }

    /// Calculate values aligned to the input.
    fn calculate_aligned(&self, data: &[f64]) -> Vec<Option<Self::Outputs>> {
        align(self.calculate(data), data.len())
    }
}

/// Indicator that needs high, low and close columns (e.g. ATR).
pub trait OhlcIndicator: Send + Sync {
    /// The output type of the indicator.
    type Output: Copy;

    /// Calculate indicator values from HLC data.
    ///
    /// # Arguments
    /// * `high` - High prices
    /// * `low` - Low prices
    /// * `close` - Close prices
    fn calculate_ohlc(&self, high: &[f64], low: &[f64], close: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Calculate values aligned to the shortest input column.
    fn calculate_ohlc_aligned(
        &self,
        high: &[f64],
        low: &[f64],
        close: &[f64],
    ) -> Vec<Option<Self::Output>> {
        let len = high.len().min(low.len()).min(close.len());
        align(self.calculate_ohlc(high, low, close), len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<f64> {
            if data.len() < self.period {
                return vec![];
            }
            // Simple sum indicator for testing
            data.windows(self.period)
                .map(|w| w.iter().sum())
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    #[test]
    fn test_calculate_aligned() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate_aligned(&data);

        assert_eq!(result.len(), data.len());
        assert_eq!(indicator.warmup(), 2);
        assert_eq!(result[0], None);
        assert_eq!(result[1], None);
        assert_eq!(result[2], Some(6.0)); // 1+2+3
        assert_eq!(result[4], Some(12.0)); // 3+4+5
    }

    #[test]
    fn test_aligned_short_input_is_all_missing() {
        let indicator = TestIndicator { period: 3 };
        let result = indicator.calculate_aligned(&[1.0, 2.0]);
        assert_eq!(result, vec![None, None]);

        assert!(indicator.calculate_aligned(&[]).is_empty());
    }
}
