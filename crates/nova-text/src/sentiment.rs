//! Lexicon-based headline polarity and daily aggregation.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::OnceLock;

use chrono::NaiveDate;
use nova_core::types::{DailySentiment, HeadlineRecord, SentimentScore};
use regex::Regex;

/// Financial sentiment lexicon.
///
/// Word weights in [-1, 1], negation words that flip the next sentiment word,
/// and intensifiers that scale it.
#[derive(Debug, Clone)]
pub struct FinancialLexicon {
    words: HashMap<String, f64>,
    negations: HashSet<String>,
    intensifiers: HashMap<String, f64>,
}

impl Default for FinancialLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl FinancialLexicon {
    /// Lexicon with the default financial vocabulary.
    pub fn new() -> Self {
        let positive = [
            ("bullish", 0.8),
            ("surge", 0.7),
            ("rally", 0.7),
            ("soar", 0.8),
            ("jump", 0.6),
            ("gain", 0.5),
            ("profit", 0.6),
            ("growth", 0.6),
            ("rise", 0.5),
            ("increase", 0.5),
            ("improve", 0.5),
            ("outperform", 0.7),
            ("beat", 0.6),
            ("exceed", 0.6),
            ("strong", 0.5),
            ("positive", 0.5),
            ("optimistic", 0.6),
            ("record", 0.6),
            ("high", 0.4),
            ("higher", 0.4),
            ("upgrade", 0.6),
            ("buy", 0.5),
            ("overweight", 0.5),
            ("breakout", 0.6),
            ("recovery", 0.5),
            ("rebound", 0.5),
            ("raise", 0.4),
            ("top", 0.3),
        ];
        let negative = [
            ("bearish", -0.8),
            ("crash", -0.9),
            ("plunge", -0.8),
            ("tumble", -0.7),
            ("drop", -0.6),
            ("fall", -0.5),
            ("decline", -0.6),
            ("loss", -0.6),
            ("lower", -0.4),
            ("low", -0.4),
            ("down", -0.4),
            ("decrease", -0.5),
            ("weak", -0.5),
            ("negative", -0.5),
            ("concern", -0.5),
            ("worry", -0.5),
            ("fear", -0.6),
            ("risk", -0.4),
            ("volatile", -0.3),
            ("uncertainty", -0.5),
            ("miss", -0.6),
            ("disappoint", -0.7),
            ("underperform", -0.6),
            ("underweight", -0.5),
            ("downgrade", -0.6),
            ("sell", -0.5),
            ("cut", -0.4),
            ("lawsuit", -0.6),
            ("recall", -0.5),
            ("crisis", -0.8),
            ("warning", -0.5),
            ("fail", -0.7),
            ("fraud", -0.9),
        ];

        let words = positive
            .iter()
            .chain(negative.iter())
            .map(|(w, s)| (w.to_string(), *s))
            .collect();

        let negations = [
            "not", "no", "never", "without", "cannot", "cant", "don't", "dont", "doesn't",
            "doesnt", "didn't", "didnt", "won't", "wont", "isn't", "isnt", "aren't", "arent",
            "wasn't", "wasnt", "hardly", "barely",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect();

        let intensifiers = [
            ("very", 1.5),
            ("extremely", 2.0),
            ("highly", 1.5),
            ("significantly", 1.5),
            ("sharply", 1.5),
            ("dramatically", 1.8),
            ("slightly", 0.5),
            ("somewhat", 0.7),
            ("marginally", 0.5),
        ]
        .iter()
        .map(|(w, m)| (w.to_string(), *m))
        .collect();

        Self {
            words,
            negations,
            intensifiers,
        }
    }

    /// Weight of a lower-case word, trying simple inflections of known stems.
    pub fn score(&self, word: &str) -> Option<f64> {
        if let Some(&w) = self.words.get(word) {
            return Some(w);
        }
        if let Some(stem) = word.strip_suffix("ies") {
            if let Some(&w) = self.words.get(&format!("{}y", stem)) {
                return Some(w);
            }
        }
        ["s", "es", "d", "ed", "ing"]
            .iter()
            .filter_map(|suffix| word.strip_suffix(suffix))
            .find_map(|stem| {
                self.words
                    .get(stem)
                    .or_else(|| self.words.get(&format!("{}e", stem)))
                    .copied()
            })
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }
}

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[a-z]+(?:'[a-z]+)?").expect("static word pattern"))
}

/// Scores headlines against a [`FinancialLexicon`].
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: FinancialLexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: FinancialLexicon) -> Self {
        Self { lexicon }
    }

    /// Polarity of one headline: mean of the matched weights, neutral if none match.
    pub fn score(&self, text: &str) -> SentimentScore {
        let lowered = text.to_lowercase();
        let mut negate = false;
        let mut multiplier = 1.0;
        let mut total = 0.0;
        let mut matched = 0usize;

        for m in word_pattern().find_iter(&lowered) {
            let word = m.as_str();
            if self.lexicon.is_negation(word) {
                negate = true;
                continue;
            }
            if let Some(scale) = self.lexicon.intensifier(word) {
                multiplier = scale;
                continue;
            }
            if let Some(weight) = self.lexicon.score(word) {
                let signed = if negate { -weight } else { weight };
                total += signed * multiplier;
                matched += 1;
                negate = false;
                multiplier = 1.0;
            }
        }

        if matched == 0 {
            SentimentScore::neutral()
        } else {
            SentimentScore::new(total / matched as f64)
        }
    }
}

/// Mean polarity per publication date for one ticker (case-insensitive match).
///
/// Dates without headlines produce no row.
pub fn daily_sentiment(
    records: &[HeadlineRecord],
    ticker: &str,
    scorer: &SentimentScorer,
) -> Vec<DailySentiment> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for record in records
        .iter()
        .filter(|r| r.ticker.eq_ignore_ascii_case(ticker))
    {
        let entry = by_date.entry(record.publish_date()).or_insert((0.0, 0));
        entry.0 += scorer.score(&record.headline).value();
        entry.1 += 1;
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| DailySentiment {
            date,
            mean_polarity: sum / count as f64,
            article_count: count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_positive_and_negative() {
        let scorer = SentimentScorer::default();
        assert!(scorer.score("Apple shares surge after earnings beat").value() > 0.0);
        assert!(scorer.score("Tesla stock plunges on recall fears").value() < 0.0);
        assert_eq!(scorer.score("Company to present at conference").value(), 0.0);
    }

    #[test]
    fn test_inflections() {
        let lexicon = FinancialLexicon::new();
        assert_eq!(lexicon.score("rallies"), Some(0.7));
        assert_eq!(lexicon.score("downgraded"), Some(-0.6));
        assert_eq!(lexicon.score("beats"), Some(0.6));
        assert_eq!(lexicon.score("surging"), Some(0.7));
        assert_eq!(lexicon.score("quarter"), None);
    }

    #[test]
    fn test_negation_and_intensifier() {
        let scorer = SentimentScorer::default();
        let plain = scorer.score("Results beat").value();
        assert!((scorer.score("Results did not beat").value() + plain).abs() < 1e-12);
        assert!((scorer.score("Results slightly beat").value() - plain * 0.5).abs() < 1e-12);
        // Capped at the top of the scale
        assert_eq!(scorer.score("extremely bullish").value(), 1.0);
    }

    #[test]
    fn test_daily_sentiment() {
        let scorer = SentimentScorer::default();
        let day = |d: u32, h: u32| Utc.with_ymd_and_hms(2020, 6, d, h, 0, 0).unwrap();
        let records = vec![
            HeadlineRecord::new("Shares surge", "P", day(2, 9), "nvda"),
            HeadlineRecord::new("Shares drop", "P", day(2, 15), "NVDA"),
            HeadlineRecord::new("Record profit", "P", day(1, 9), "NVDA"),
            HeadlineRecord::new("Shares surge", "P", day(1, 9), "AMD"),
        ];

        let daily = daily_sentiment(&records, "NVDA", &scorer);
        assert_eq!(daily.len(), 2);
        assert_eq!(daily[0].date, NaiveDate::from_ymd_opt(2020, 6, 1).unwrap());
        assert_eq!(daily[0].article_count, 1);
        assert!((daily[0].mean_polarity - 0.6).abs() < 1e-12);
        assert_eq!(daily[1].article_count, 2);
        assert!((daily[1].mean_polarity - (0.7 - 0.6) / 2.0).abs() < 1e-12);

        assert!(daily_sentiment(&records, "TSLA", &scorer).is_empty());
    }
}
