//! Run reports and their console summaries.

use chrono::NaiveDate;
use nova_core::types::CorrelationResult;
use nova_indicators::TechnicalSummary;
use nova_text::Topic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const RULE: &str = "═══════════════════════════════════════════════════════════\n";
const SECTION: &str = "───────────────────────────────────────────────────────────\n";

/// Two-sided p-value below which a correlation is flagged in the summary.
const SIGNIFICANCE_LEVEL: f64 = 0.05;

fn header(s: &mut String, title: &str) {
    s.push_str(RULE);
    s.push_str(&format!("{:^59}\n", title));
    s.push_str(RULE);
    s.push('\n');
}

fn section(s: &mut String, title: &str) {
    s.push_str(title);
    s.push('\n');
    s.push_str(SECTION);
}

fn optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_else(|| "n/a".to_string())
}

fn outputs(s: &mut String, files: &[PathBuf]) {
    section(s, "OUTPUTS");
    s.push_str(&format!("  Files Written:       {}\n", files.len()));
    for file in files {
        s.push_str(&format!("    {}\n", file.display()));
    }
    s.push('\n');
    s.push_str(RULE);
}

/// Outcome of an exploratory analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdaReport {
    pub headlines: usize,
    pub skipped_rows: usize,
    pub mean_char_length: Option<f64>,
    pub char_length_skewness: Option<f64>,
    pub publishers: usize,
    pub gini_coefficient: f64,
    pub top_10_percentage: f64,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub peak_hour: Option<u32>,
    pub weekday_p_value: Option<f64>,
    /// `None` when topic extraction was skipped
    pub topics: Option<Vec<Topic>>,
    pub files: Vec<PathBuf>,
}

impl EdaReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        header(&mut s, "EXPLORATORY ANALYSIS");

        section(&mut s, "DATASET");
        s.push_str(&format!("  Headlines:           {}\n", self.headlines));
        s.push_str(&format!("  Skipped Rows:        {}\n", self.skipped_rows));
        if let Some((start, end)) = self.date_range {
            s.push_str(&format!("  Date Range:          {} to {}\n", start, end));
        }
        s.push('\n');

        section(&mut s, "HEADLINES");
        s.push_str(&format!(
            "  Mean Length:         {} chars\n",
            optional(self.mean_char_length, 1)
        ));
        s.push_str(&format!(
            "  Skewness:            {}\n",
            optional(self.char_length_skewness, 2)
        ));
        s.push('\n');

        section(&mut s, "PUBLISHERS");
        s.push_str(&format!("  Publishers:          {}\n", self.publishers));
        s.push_str(&format!("  Gini:                {:.3}\n", self.gini_coefficient));
        s.push_str(&format!("  Top 10 Share:        {:.1}%\n", self.top_10_percentage));
        s.push('\n');

        section(&mut s, "TIMING");
        s.push_str(&format!(
            "  Peak Hour (UTC):     {}\n",
            self.peak_hour
                .map(|h| h.to_string())
                .unwrap_or_else(|| "n/a".to_string())
        ));
        s.push_str(&format!(
            "  Weekday p-value:     {}\n",
            self.weekday_p_value
                .map(|p| format!("{:.2e}", p))
                .unwrap_or_else(|| "n/a".to_string())
        ));
        s.push('\n');

        section(&mut s, "TOPICS");
        match &self.topics {
            Some(topics) => {
                for topic in topics {
                    s.push_str(&format!(
                        "  Topic {}: {}\n",
                        topic.topic,
                        topic.keywords.join(", ")
                    ));
                }
            }
            None => s.push_str("  Skipped (empty vocabulary)\n"),
        }
        s.push('\n');

        outputs(&mut s, &self.files);
        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Per-ticker load counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TickerRun {
    pub ticker: String,
    pub rows: usize,
    pub skipped_rows: usize,
}

/// Outcome of a technical indicator run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalsReport {
    pub tickers: Vec<TickerRun>,
    pub summaries: Vec<TechnicalSummary>,
    pub files: Vec<PathBuf>,
}

impl TechnicalsReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        header(&mut s, "TECHNICAL INDICATORS");

        section(&mut s, "TICKERS");
        for run in &self.tickers {
            s.push_str(&format!(
                "  {:<8} {:>6} bars  ({} skipped)\n",
                run.ticker, run.rows, run.skipped_rows
            ));
        }
        s.push('\n');

        section(&mut s, "LATEST");
        for summary in &self.summaries {
            let date = summary
                .date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "insufficient history".to_string());
            s.push_str(&format!("  {} ({})\n", summary.ticker, date));
            s.push_str(&format!("    close          {}\n", optional(summary.close, 2)));
            for (name, value) in &summary.metrics {
                s.push_str(&format!("    {:<14} {}\n", name, optional(*value, 4)));
            }
        }
        s.push('\n');

        outputs(&mut s, &self.files);
        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Outcome of a sentiment correlation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationReport {
    pub headlines: usize,
    pub results: Vec<CorrelationResult>,
    pub files: Vec<PathBuf>,
}

impl CorrelationReport {
    /// Generate a text summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        header(&mut s, "SENTIMENT CORRELATION");

        section(&mut s, "RESULTS");
        s.push_str(&format!("  Headlines Scored:    {}\n", self.headlines));
        for result in &self.results {
            match result.coefficient {
                Some(r) => s.push_str(&format!(
                    "  {:<8} r = {:+.3}  p = {}  n = {}{}\n",
                    result.ticker,
                    r,
                    optional(result.p_value, 4),
                    result.sample_size,
                    if result.is_significant(SIGNIFICANCE_LEVEL) { "  *" } else { "" }
                )),
                None => s.push_str(&format!(
                    "  {:<8} undefined  n = {}\n",
                    result.ticker, result.sample_size
                )),
            }
        }
        s.push_str(&format!("  (* p < {})\n", SIGNIFICANCE_LEVEL));
        s.push('\n');

        outputs(&mut s, &self.files);
        s
    }

    /// Export to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
