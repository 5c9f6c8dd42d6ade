//! Daily returns and date alignment.

use chrono::NaiveDate;
use nova_core::types::{DailySentiment, PriceSeries};

/// Simple close-to-close returns `close[t] / close[t - 1] - 1`.
///
/// The first bar has no return. Days whose return is not finite (a zero
/// previous close) are left out.
pub fn daily_returns(series: &PriceSeries) -> Vec<(NaiveDate, f64)> {
    series
        .bars()
        .windows(2)
        .map(|w| (w[1].date, w[1].close / w[0].close - 1.0))
        .filter(|(_, r)| r.is_finite())
        .collect()
}

/// Pair sentiment and returns that share a date, dropping the rest.
///
/// Both inputs must be sorted by date with unique dates.
pub fn inner_join(sentiment: &[DailySentiment], returns: &[(NaiveDate, f64)]) -> Vec<(f64, f64)> {
    let mut joined = Vec::with_capacity(sentiment.len().min(returns.len()));
    let (mut i, mut j) = (0, 0);
    while i < sentiment.len() && j < returns.len() {
        let (date, ret) = returns[j];
        match sentiment[i].date.cmp(&date) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                joined.push((sentiment[i].mean_polarity, ret));
                i += 1;
                j += 1;
            }
        }
    }
    joined
}
