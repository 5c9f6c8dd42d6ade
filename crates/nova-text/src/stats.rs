//! Descriptive statistics and hypothesis tests over numeric samples.

use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use statrs::statistics::Statistics;

/// Summary of a numeric sample in the layout of a `describe()` table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; NaN for a single value
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

impl Describe {
    /// Describe a sample, `None` if it is empty.
    pub fn of(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        Some(Self {
            count: values.len(),
            mean: values.iter().mean(),
            std: values.iter().std_dev(),
            min: sorted[0],
            q25: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q75: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
        })
    }

    /// Row labels and values in `describe()` order.
    pub fn rows(&self) -> [(&'static str, f64); 8] {
        [
            ("count", self.count as f64),
            ("mean", self.mean),
            ("std", self.std),
            ("min", self.min),
            ("25%", self.q25),
            ("50%", self.median),
            ("75%", self.q75),
            ("max", self.max),
        ]
    }
}

/// Linearly interpolated quantile of an ascending slice.
pub fn quantile(sorted: &[f64], q: f64) -> f64 {
    match sorted.len() {
        0 => f64::NAN,
        1 => sorted[0],
        n => {
            let pos = q.clamp(0.0, 1.0) * (n - 1) as f64;
            let lower = pos.floor() as usize;
            let upper = pos.ceil() as usize;
            let frac = pos - lower as f64;
            sorted[lower] + (sorted[upper] - sorted[lower]) * frac
        }
    }
}

/// Biased central moments (m2, m3, m4).
fn central_moments(values: &[f64]) -> (f64, f64, f64) {
    let n = values.len() as f64;
    let mean = values.iter().mean();
    values.iter().fold((0.0, 0.0, 0.0), |(m2, m3, m4), &x| {
        let d = x - mean;
        let d2 = d * d;
        (m2 + d2 / n, m3 + d2 * d / n, m4 + d2 * d2 / n)
    })
}

/// Biased sample skewness `m3 / m2^1.5`; `None` for empty or constant samples.
pub fn skewness(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let (m2, m3, _) = central_moments(values);
    (m2 > 0.0).then(|| m3 / m2.powf(1.5))
}

/// Biased excess kurtosis `m4 / m2^2 - 3`; `None` for empty or constant samples.
pub fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let (m2, _, m4) = central_moments(values);
    (m2 > 0.0).then(|| m4 / (m2 * m2) - 3.0)
}

/// Result of a test producing a statistic and a p-value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub statistic: f64,
    pub p_value: f64,
}

/// D'Agostino skewness z-score. Needs at least 8 values.
fn skew_z(n: f64, skew: f64) -> f64 {
    let mut y = skew * ((n + 1.0) * (n + 3.0) / (6.0 * (n - 2.0))).sqrt();
    let beta2 = 3.0 * (n * n + 27.0 * n - 70.0) * (n + 1.0) * (n + 3.0)
        / ((n - 2.0) * (n + 5.0) * (n + 7.0) * (n + 9.0));
    let w2 = -1.0 + (2.0 * (beta2 - 1.0)).sqrt();
    let delta = 1.0 / (0.5 * w2.ln()).sqrt();
    let alpha = (2.0 / (w2 - 1.0)).sqrt();
    if y == 0.0 {
        y = 1.0;
    }
    let ya = y / alpha;
    delta * (ya + (ya * ya + 1.0).sqrt()).ln()
}

/// Anscombe-Glynn kurtosis z-score on Pearson kurtosis `b2`.
fn kurtosis_z(n: f64, b2: f64) -> Option<f64> {
    let expected = 3.0 * (n - 1.0) / (n + 1.0);
    let var_b2 = 24.0 * n * (n - 2.0) * (n - 3.0)
        / ((n + 1.0) * (n + 1.0) * (n + 3.0) * (n + 5.0));
    let x = (b2 - expected) / var_b2.sqrt();
    let sqrt_beta1 = 6.0 * (n * n - 5.0 * n + 2.0) / ((n + 7.0) * (n + 9.0))
        * (6.0 * (n + 3.0) * (n + 5.0) / (n * (n - 2.0) * (n - 3.0))).sqrt();
    let a = 6.0
        + 8.0 / sqrt_beta1 * (2.0 / sqrt_beta1 + (1.0 + 4.0 / (sqrt_beta1 * sqrt_beta1)).sqrt());
    let term1 = 1.0 - 2.0 / (9.0 * a);
    let denom = 1.0 + x * (2.0 / (a - 4.0)).sqrt();
    if denom == 0.0 {
        return None;
    }
    let term2 = denom.signum() * ((1.0 - 2.0 / a) / denom.abs()).powf(1.0 / 3.0);
    Some((term1 - term2) / (2.0 / (9.0 * a)).sqrt())
}

/// D'Agostino-Pearson K² omnibus normality test.
///
/// Returns `None` for fewer than 8 values or a constant sample.
pub fn normal_test(values: &[f64]) -> Option<TestResult> {
    if values.len() < 8 {
        return None;
    }
    let n = values.len() as f64;
    let skew = skewness(values)?;
    let kurt = excess_kurtosis(values)? + 3.0;

    let z_skew = skew_z(n, skew);
    let z_kurt = kurtosis_z(n, kurt)?;
    let statistic = z_skew * z_skew + z_kurt * z_kurt;
    if !statistic.is_finite() {
        return None;
    }

    let chi2 = ChiSquared::new(2.0).ok()?;
    Some(TestResult {
        statistic,
        p_value: chi2.sf(statistic),
    })
}

/// Chi-square goodness-of-fit of `observed` against a uniform expectation.
///
/// Returns `None` with fewer than two categories or no observations.
pub fn chi_square_uniform(observed: &[f64]) -> Option<TestResult> {
    let k = observed.len();
    let total: f64 = observed.iter().sum();
    if k < 2 || total <= 0.0 {
        return None;
    }
    let expected = total / k as f64;
    let statistic = observed
        .iter()
        .map(|&o| (o - expected).powi(2) / expected)
        .sum::<f64>();

    let chi2 = ChiSquared::new((k - 1) as f64).ok()?;
    Some(TestResult {
        statistic,
        p_value: chi2.sf(statistic),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use statrs::distribution::Normal;

    #[test]
    fn test_describe() {
        let d = Describe::of(&[4.0, 1.0, 3.0, 2.0]).unwrap();

        assert_eq!(d.count, 4);
        assert!((d.mean - 2.5).abs() < 1e-12);
        // sample variance = 5/3
        assert!((d.std - (5.0_f64 / 3.0).sqrt()).abs() < 1e-12);
        assert_eq!(d.min, 1.0);
        assert!((d.q25 - 1.75).abs() < 1e-12);
        assert!((d.median - 2.5).abs() < 1e-12);
        assert!((d.q75 - 3.25).abs() < 1e-12);
        assert_eq!(d.max, 4.0);
        assert_eq!(d.rows()[4].0, "25%");

        assert!(Describe::of(&[]).is_none());
    }

    #[test]
    fn test_skewness_and_kurtosis() {
        let symmetric = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(skewness(&symmetric).unwrap().abs() < 1e-12);
        // Uniform-like grid: m2 = 2, m4 = 6.8 -> 6.8/4 - 3
        assert!((excess_kurtosis(&symmetric).unwrap() - (-1.3)).abs() < 1e-12);

        let right_tail = [1.0, 1.0, 1.0, 1.0, 10.0];
        assert!(skewness(&right_tail).unwrap() > 1.0);

        assert!(skewness(&[3.0, 3.0, 3.0]).is_none());
        assert!(excess_kurtosis(&[]).is_none());
    }

    #[test]
    fn test_normal_test_accepts_normal_shape() {
        let normal = Normal::new(50.0, 10.0).unwrap();
        let n = 500;
        let values: Vec<f64> = (0..n)
            .map(|i| normal.inverse_cdf((i as f64 + 0.5) / n as f64))
            .collect();

        let result = normal_test(&values).unwrap();
        assert!(result.p_value > 0.05, "p = {}", result.p_value);
    }

    #[test]
    fn test_normal_test_rejects_skewed_sample() {
        // Exponential-like quantiles
        let n = 500;
        let values: Vec<f64> = (0..n)
            .map(|i| -(1.0 - (i as f64 + 0.5) / n as f64).ln())
            .collect();

        let result = normal_test(&values).unwrap();
        assert!(result.p_value < 0.05);
        assert!(result.statistic > 0.0);
    }

    #[test]
    fn test_normal_test_degenerate_inputs() {
        assert!(normal_test(&[1.0, 2.0, 3.0]).is_none());
        assert!(normal_test(&[7.0; 20]).is_none());
    }

    #[test]
    fn test_chi_square_uniform() {
        let uniform = chi_square_uniform(&[10.0; 7]).unwrap();
        assert!(uniform.statistic.abs() < 1e-12);
        assert!((uniform.p_value - 1.0).abs() < 1e-9);

        let skewed = chi_square_uniform(&[100.0, 100.0, 100.0, 100.0, 100.0, 5.0, 5.0]).unwrap();
        assert!(skewed.p_value < 1e-6);

        assert!(chi_square_uniform(&[0.0; 7]).is_none());
        assert!(chi_square_uniform(&[3.0]).is_none());
    }
}
