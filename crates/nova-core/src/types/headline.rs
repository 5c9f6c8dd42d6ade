//! News headline records.

use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};

/// Placeholder used when a publisher address carries no `@domain` part.
pub const NOT_EMAIL: &str = "not_email";

/// A single published headline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadlineRecord {
    /// Headline text
    pub headline: String,
    /// Publisher name or e-mail address
    pub publisher: String,
    /// Publication time normalized to UTC
    pub published_at: DateTime<Utc>,
    /// Ticker the headline is filed under
    pub ticker: String,
}

impl HeadlineRecord {
    /// Create a new headline record.
    pub fn new(
        headline: impl Into<String>,
        publisher: impl Into<String>,
        published_at: DateTime<Utc>,
        ticker: impl Into<String>,
    ) -> Self {
        Self {
            headline: headline.into(),
            publisher: publisher.into(),
            published_at,
            ticker: ticker.into(),
        }
    }

    /// Length of the headline in characters.
    #[inline]
    pub fn char_len(&self) -> usize {
        self.headline.chars().count()
    }

    /// Lower-cased domain of an e-mail style publisher, or `not_email`.
    pub fn publisher_domain(&self) -> String {
        match self.publisher.rsplit_once('@') {
            Some((_, domain)) if !domain.is_empty() => domain.to_lowercase(),
            _ => NOT_EMAIL.to_string(),
        }
    }

    /// UTC calendar date of publication.
    #[inline]
    pub fn publish_date(&self) -> NaiveDate {
        self.published_at.date_naive()
    }

    /// UTC hour of publication (0-23).
    #[inline]
    pub fn publish_hour(&self) -> u32 {
        self.published_at.hour()
    }

    /// Day of the week of publication (UTC).
    #[inline]
    pub fn publish_weekday(&self) -> Weekday {
        self.published_at.weekday()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(publisher: &str) -> HeadlineRecord {
        HeadlineRecord::new(
            "Stocks That Hit 52-Week Highs On Friday",
            publisher,
            Utc.with_ymd_and_hms(2020, 6, 5, 14, 30, 54).unwrap(),
            "A",
        )
    }

    #[test]
    fn test_publisher_domain() {
        assert_eq!(record("vick@benzinga.com").publisher_domain(), "benzinga.com");
        assert_eq!(record("Jane@Example.ORG").publisher_domain(), "example.org");
        assert_eq!(record("Benzinga Insights").publisher_domain(), NOT_EMAIL);
        assert_eq!(record("trailing@").publisher_domain(), NOT_EMAIL);
    }

    #[test]
    fn test_time_accessors() {
        let r = record("Lisa Levin");
        assert_eq!(r.publish_date(), NaiveDate::from_ymd_opt(2020, 6, 5).unwrap());
        assert_eq!(r.publish_hour(), 14);
        assert_eq!(r.publish_weekday(), Weekday::Fri);
        assert_eq!(r.char_len(), 39);
    }
}
