//! Sentiment records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Polarity of a single headline, bounded to [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore(f64);

impl SentimentScore {
    /// Lower bound of the polarity scale.
    pub const MIN: f64 = -1.0;
    /// Upper bound of the polarity scale.
    pub const MAX: f64 = 1.0;

    /// Create a score, clamping into [-1, 1]. NaN maps to neutral.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self(0.0)
        } else {
            Self(value.clamp(Self::MIN, Self::MAX))
        }
    }

    /// Neutral score.
    pub fn neutral() -> Self {
        Self(0.0)
    }

    /// Raw polarity value.
    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Mean polarity of all headlines published on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySentiment {
    /// Publication date (UTC)
    pub date: NaiveDate,
    /// Mean polarity across the day's headlines
    pub mean_polarity: f64,
    /// Number of headlines, always at least one
    pub article_count: usize,
}
