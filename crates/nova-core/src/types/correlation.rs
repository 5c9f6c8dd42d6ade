//! Sentiment-to-return correlation result.

use serde::{Deserialize, Serialize};

/// Pearson correlation between daily sentiment and daily returns for a ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Ticker symbol
    pub ticker: String,
    /// Pearson coefficient, `None` when undefined
    pub coefficient: Option<f64>,
    /// Number of paired (sentiment, return) observations
    pub sample_size: usize,
    /// Two-sided p-value, `None` when undefined
    pub p_value: Option<f64>,
}

impl CorrelationResult {
    /// Result for a ticker whose correlation cannot be computed.
    pub fn undefined(ticker: impl Into<String>, sample_size: usize) -> Self {
        Self {
            ticker: ticker.into(),
            coefficient: None,
            sample_size,
            p_value: None,
        }
    }

    /// Whether a coefficient was computed.
    pub fn is_defined(&self) -> bool {
        self.coefficient.is_some()
    }

    /// Whether the correlation is significant at `alpha`.
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value.map(|p| p < alpha).unwrap_or(false)
    }
}
