//! Pearson correlation with a Student-t significance estimate.

use nova_core::error::CorrelationError;
use nova_core::types::{CorrelationResult, DailySentiment, PriceSeries};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, StudentsT};
use tracing::debug;

use crate::returns::{daily_returns, inner_join};

/// Smallest sample the engine will correlate.
pub const MIN_SAMPLES_FLOOR: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationParams {
    /// Paired observations required before a coefficient is reported
    pub min_samples: usize,
}

impl Default for CorrelationParams {
    fn default() -> Self {
        Self {
            min_samples: MIN_SAMPLES_FLOOR,
        }
    }
}

impl CorrelationParams {
    pub fn validate(&self) -> Result<(), CorrelationError> {
        if self.min_samples < MIN_SAMPLES_FLOOR {
            return Err(CorrelationError::InvalidParameter(format!(
                "min_samples must be at least {}, got {}",
                MIN_SAMPLES_FLOOR, self.min_samples
            )));
        }
        Ok(())
    }
}

/// Pearson r of paired samples.
///
/// `None` for fewer than two pairs, zero variance or a non-finite coefficient.
pub fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0, 0.0, 0.0);
    for &(x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }
    if !(sxx > 0.0 && syy > 0.0) {
        return None;
    }
    let r = sxy / (sxx * syy).sqrt();
    r.is_finite().then_some(r.clamp(-1.0, 1.0))
}

/// Two-sided p-value of `r` over `n` pairs from a t distribution with `n - 2` dof.
fn p_value(r: f64, n: usize) -> Option<f64> {
    if n < 3 {
        return None;
    }
    let dof = (n - 2) as f64;
    if !r.is_finite() {
        return None;
    }
    if r.abs() >= 1.0 {
        return Some(0.0);
    }
    let t = r * (dof / (1.0 - r * r)).sqrt();
    let dist = StudentsT::new(0.0, 1.0, dof).ok()?;
    Some((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}

/// Correlates a ticker's daily sentiment with its daily returns.
#[derive(Debug, Clone)]
pub struct CorrelationEngine {
    params: CorrelationParams,
}

impl CorrelationEngine {
    pub fn new(params: CorrelationParams) -> Result<Self, CorrelationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &CorrelationParams {
        &self.params
    }

    /// Join on date and correlate. Too few pairs or a flat side gives an undefined result.
    pub fn correlate(
        &self,
        ticker: &str,
        prices: &PriceSeries,
        sentiment: &[DailySentiment],
    ) -> CorrelationResult {
        let returns = daily_returns(prices);
        let pairs = inner_join(sentiment, &returns);
        let n = pairs.len();

        if n < self.params.min_samples {
            debug!(ticker, pairs = n, "Too few paired days to correlate");
            return CorrelationResult::undefined(ticker, n);
        }

        match pearson(&pairs) {
            Some(r) => CorrelationResult {
                ticker: ticker.to_string(),
                coefficient: Some(r),
                sample_size: n,
                p_value: p_value(r, n),
            },
            None => {
                debug!(ticker, pairs = n, "Zero variance in sentiment or returns");
                CorrelationResult::undefined(ticker, n)
            }
        }
    }
}
