//! End-to-end runs over small on-disk datasets.

use nova_config::AppConfig;
use nova_core::error::{DataError, NovaError};
use nova_pipeline::{run_correlation, run_eda, run_technicals};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

const HEADLINES: &[&str] = &[
    "Apple shares surge after earnings beat",
    "Apple stock falls on iPhone demand concern",
    "Analysts upgrade Apple price target",
    "Apple rallies to record high",
    "Apple shares drop as supply chain worries grow",
    "Apple announces new buyback program",
];

fn headlines_csv(rows: usize) -> String {
    let mut csv = String::from(",headline,url,publisher,date,stock\n");
    for i in 0..rows {
        let day = 2 + (i % 20);
        let hour = 9 + (i % 8);
        let publisher = ["Benzinga Newsdesk", "Lisa Levin", "analyst@zacks.com"][i % 3];
        writeln!(
            csv,
            "{},{},https://example.com/{},{},2020-03-{:02} {:02}:15:00-04:00,AAPL",
            i,
            HEADLINES[i % HEADLINES.len()],
            i,
            publisher,
            day,
            hour
        )
        .unwrap();
    }
    csv
}

fn prices_csv(days: usize) -> String {
    let mut csv = String::from("Date,Open,High,Low,Close,Adj Close,Volume\n");
    let start = chrono::NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
    for i in 0..days {
        let date = start + chrono::Duration::days(i as i64);
        // Alternating up and down days keep the returns non-constant
        let close = 100.0 + i as f64 + if i % 2 == 0 { 1.5 } else { -1.0 };
        writeln!(
            csv,
            "{},{:.2},{:.2},{:.2},{:.2},{:.2},{}",
            date,
            close - 0.5,
            close + 1.0,
            close - 1.0,
            close,
            close,
            1_000 + i * 10
        )
        .unwrap();
    }
    csv
}

fn workspace(headlines: usize, price_days: usize) -> (TempDir, AppConfig) {
    let dir = tempdir().unwrap();
    let root = dir.path();

    let headlines_path = root.join("raw").join("headlines.csv");
    fs::create_dir_all(headlines_path.parent().unwrap()).unwrap();
    fs::write(&headlines_path, headlines_csv(headlines)).unwrap();

    let prices_dir = root.join("prices");
    fs::create_dir_all(&prices_dir).unwrap();
    fs::write(prices_dir.join("aapl.csv"), prices_csv(price_days)).unwrap();
    fs::write(prices_dir.join("msft.csv"), prices_csv(price_days)).unwrap();

    let mut config = AppConfig::default();
    config.paths.headlines = headlines_path;
    config.paths.prices_dir = prices_dir;
    config.paths.eda_output = root.join("out").join("eda");
    config.paths.technicals_output = root.join("out").join("technicals");
    config.paths.sentiment_output = root.join("out").join("sentiment");
    (dir, config)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn eda_writes_every_artifact() {
    let (_dir, mut config) = workspace(60, 10);
    config.topics.n_topics = 2;
    config.topics.min_df = 2;
    config.topics.top_n = 3;

    let report = run_eda(&config).unwrap();
    assert_eq!(report.headlines, 60);
    assert_eq!(report.publishers, 3);
    assert_eq!(report.topics.as_ref().map(Vec::len), Some(2));

    let out = &config.paths.eda_output;
    for name in [
        "headline_length_stats.csv",
        "statistical_analysis.json",
        "publisher_article_counts.csv",
        "publisher_domain_counts.csv",
        "publisher_concentration_stats.json",
        "daily_publication_counts.csv",
        "weekday_publication_counts.csv",
        "hourly_publication_counts.csv",
        "time_series_statistics.json",
        "topic_keywords.json",
    ] {
        assert!(out.join(name).exists(), "missing {}", name);
    }
    assert_eq!(report.files.len(), 10);

    let lengths = read(&out.join("headline_length_stats.csv"));
    assert!(lengths.starts_with(",headline_len_chars,headline_len_words"));
    assert!(lengths.contains("count,60,60"));

    let weekdays = read(&out.join("weekday_publication_counts.csv"));
    assert!(weekdays.starts_with("publish_dayofweek,article_count"));

    let summary = report.summary();
    assert!(summary.contains("EXPLORATORY ANALYSIS"));
    assert!(summary.contains("Topic 1:"));
}

#[test]
fn eda_skips_topics_when_vocabulary_is_empty() {
    // Default min_df of 25 leaves nothing in a 12-headline corpus
    let (_dir, config) = workspace(12, 10);

    let report = run_eda(&config).unwrap();
    assert!(report.topics.is_none());
    assert!(!config.paths.eda_output.join("topic_keywords.json").exists());
    assert_eq!(report.files.len(), 9);
}

#[test]
fn eda_missing_dataset_is_fatal() {
    let (_dir, mut config) = workspace(5, 5);
    config.paths.headlines = config.paths.headlines.with_file_name("missing.csv");

    let err = run_eda(&config).unwrap_err();
    assert!(matches!(err, NovaError::Data(DataError::NotFound(_))));
}

#[test]
fn technicals_per_ticker_and_summary() {
    let (_dir, config) = workspace(5, 60);

    let report = run_technicals(&config).unwrap();
    assert_eq!(report.tickers.len(), 2);
    assert_eq!(report.tickers[0].ticker, "AAPL");
    assert_eq!(report.tickers[0].rows, 60);
    assert_eq!(report.summaries.len(), 2);
    assert!(report.summaries[0].date.is_some());

    let out = &config.paths.technicals_output;
    let aapl = read(&out.join("AAPL_technicals.csv"));
    let mut lines = aapl.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Date,Open,High,Low,Close,Volume,"));
    assert_eq!(lines.count(), 60);

    // Warm-up rows leave indicator cells empty
    let first = aapl.lines().nth(1).unwrap();
    assert!(first.ends_with(",1000,,,,,,,,,,"));

    let summary = read(&out.join("technical_summary.csv"));
    assert!(summary.starts_with("ticker,date,close,"));
    assert_eq!(summary.lines().count(), 3);
}

#[test]
fn technicals_empty_price_directory() {
    let (_dir, config) = workspace(5, 5);
    for entry in fs::read_dir(&config.paths.prices_dir).unwrap() {
        fs::remove_file(entry.unwrap().path()).unwrap();
    }

    let err = run_technicals(&config).unwrap_err();
    assert!(matches!(err, NovaError::Data(DataError::NoDataAvailable(_))));
}

#[test]
fn correlation_per_ticker() {
    let (_dir, config) = workspace(60, 30);

    let report = run_correlation(&config).unwrap();
    assert_eq!(report.headlines, 60);
    assert_eq!(report.results.len(), 2);

    let aapl = &report.results[0];
    assert_eq!(aapl.ticker, "AAPL");
    assert!(aapl.sample_size >= 3);

    // No MSFT headlines: no sentiment rows, undefined correlation
    let msft = &report.results[1];
    assert_eq!(msft.ticker, "MSFT");
    assert_eq!(msft.sample_size, 0);
    assert!(msft.coefficient.is_none());
    assert!(msft.p_value.is_none());

    let out = &config.paths.sentiment_output;
    let msft_daily = read(&out.join("MSFT_daily_sentiment.csv"));
    assert_eq!(msft_daily.trim(), "date,mean_polarity,article_count");

    let table = read(&out.join("sentiment_correlation.csv"));
    assert!(table.starts_with("ticker,correlation,sample_size,p_value"));
    assert!(table.contains("MSFT,,0,"));
}
