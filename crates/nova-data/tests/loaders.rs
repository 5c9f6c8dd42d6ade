//! Loader and writer round trips against files on disk.

use chrono::NaiveDate;
use nova_core::error::DataError;
use nova_data::{discover_price_files, load_headlines, load_prices, write_csv, write_json};
use std::fs;
use tempfile::tempdir;

const HEADLINES: &str = "\
,headline,url,publisher,date,stock
0,Stocks That Hit 52-Week Highs On Friday,https://example.com/a,Benzinga Insights,2020-06-05 10:30:54-04:00,A
1,\"Agilent Technologies, Inc. Beats Q2 Estimates\",https://example.com/b,vick@benzinga.com,2020-05-22 00:00:00,A
2,Shares Of Tesla Trade Higher,https://example.com/c,,2020-05-22,TSLA
3,Broken Row,https://example.com/d,Lisa Levin,not a date,TSLA
";

#[test]
fn loads_headlines_and_skips_bad_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("raw_analyst_ratings.csv");
    fs::write(&path, HEADLINES).unwrap();

    let (records, report) = load_headlines(&path).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 1);

    assert_eq!(records[0].headline, "Stocks That Hit 52-Week Highs On Friday");
    assert_eq!(records[0].publish_hour(), 14);
    assert_eq!(records[1].headline, "Agilent Technologies, Inc. Beats Q2 Estimates");
    assert_eq!(records[1].publisher_domain(), "benzinga.com");
    assert_eq!(records[2].publisher, "Unknown");
    assert_eq!(records[2].ticker, "TSLA");
}

#[test]
fn headline_with_invalid_utf8_is_kept() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("latin1.csv");
    let mut bytes = b",headline,url,publisher,date,stock\n0,Soci".to_vec();
    bytes.push(0xE9);
    bytes.extend_from_slice(b"t\xE9 G\xE9n\xE9rale upgraded,https://example.com/e,Lisa Levin,2020-06-01,GLE\n");
    fs::write(&path, bytes).unwrap();

    let (records, report) = load_headlines(&path).unwrap();
    assert_eq!(report.loaded, 1);
    assert_eq!(report.skipped, 0);
    assert!(records[0].headline.starts_with("Soci\u{FFFD}t\u{FFFD}"));
    assert!(records[0].headline.ends_with("upgraded"));
    assert_eq!(records[0].ticker, "GLE");
}

#[test]
fn missing_headline_file_is_not_found() {
    let dir = tempdir().unwrap();
    let result = load_headlines(&dir.path().join("missing.csv"));
    assert!(matches!(result, Err(DataError::NotFound(_))));
}

#[test]
fn loads_prices_sorted_and_deduplicated() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("aapl.csv");
    fs::write(
        &path,
        "Date,Open,High,Low,Close,Adj Close,Volume\n\
         2020-01-03,10,11,9,10.5,10.4,1000\n\
         2020-01-02,9,10,8,9.5,9.4,900\n\
         2020-01-03,99,99,99,99,99,1\n\
         2020-01-06,10,11,9,oops,10,1000\n\
         2020-01-07,11,12,10,11.5,11.4,1200\n",
    )
    .unwrap();

    let files = discover_price_files(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].0, "AAPL");

    let (series, report) = load_prices(&files[0].1, &files[0].0).unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 2);
    assert_eq!(series.ticker, "AAPL");
    assert_eq!(series.dates()[0], NaiveDate::from_ymd_opt(2020, 1, 2).unwrap());
    // First row for 2020-01-03 wins
    assert_eq!(series.closes(), vec![9.5, 10.5, 11.5]);
}

#[test]
fn price_rows_keep_blank_fields_as_nan() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tsla.csv");
    fs::write(
        &path,
        "Date,Open,High,Low,Close,Adj Close,Volume\n\
         2020-01-02,9,10,8,9.5,9.4,\n\
         2020-01-03,,11,9,10.5,10.4,1000\n\
         2020-01-06,n/a,12,10,11.5,11.4,1200\n\
         2020-01-07,11,12,10,,11.4,1200\n",
    )
    .unwrap();

    let (series, report) = load_prices(&path, "TSLA").unwrap();
    assert_eq!(report.loaded, 3);
    assert_eq!(report.skipped, 1);
    assert_eq!(series.closes(), vec![9.5, 10.5, 11.5]);

    let bars = series.bars();
    assert!(bars[0].volume.is_nan());
    assert_eq!(bars[0].open, 9.0);
    assert!(bars[1].open.is_nan());
    assert!(bars[2].open.is_nan());
    assert_eq!(bars[2].high, 12.0);
}

#[test]
fn discovery_ignores_other_files() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("msft.csv"), "Date,Open,High,Low,Close,Volume\n").unwrap();
    fs::write(dir.path().join("AMZN.CSV"), "Date,Open,High,Low,Close,Volume\n").unwrap();
    fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

    let tickers: Vec<String> = discover_price_files(dir.path())
        .unwrap()
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(tickers, vec!["AMZN", "MSFT"]);
}

#[test]
fn writers_create_directories() {
    let dir = tempdir().unwrap();
    let csv_path = dir.path().join("nested/out/counts.csv");
    write_csv(
        &csv_path,
        &["publisher", "article_count"],
        vec![vec!["Paul Quintaro".to_string(), "2".to_string()]],
    )
    .unwrap();
    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "publisher,article_count\nPaul Quintaro,2\n"
    );

    let json_path = dir.path().join("nested/stats.json");
    write_json(&json_path, &serde_json::json!({"gini_coefficient": 0.5})).unwrap();
    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed["gini_coefficient"], 0.5);
}
