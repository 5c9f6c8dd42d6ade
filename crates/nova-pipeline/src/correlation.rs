//! Headline sentiment against daily price moves, one ticker at a time.

use nova_config::AppConfig;
use nova_core::error::NovaResult;
use nova_core::types::{CorrelationResult, DailySentiment};
use nova_correlation::CorrelationEngine;
use nova_data::{format_optional, load_headlines, write_csv};
use nova_text::{daily_sentiment, SentimentScorer};
use std::path::Path;
use tracing::{info, warn};

use crate::report::CorrelationReport;
use crate::technicals::load_price_universe;

fn write_daily_csv(path: &Path, daily: &[DailySentiment]) -> NovaResult<()> {
    write_csv(
        path,
        &["date", "mean_polarity", "article_count"],
        daily.iter().map(|d| {
            [
                d.date.to_string(),
                d.mean_polarity.to_string(),
                d.article_count.to_string(),
            ]
        }),
    )?;
    Ok(())
}

fn write_results_csv(path: &Path, results: &[CorrelationResult]) -> NovaResult<()> {
    write_csv(
        path,
        &["ticker", "correlation", "sample_size", "p_value"],
        results.iter().map(|r| {
            [
                r.ticker.clone(),
                format_optional(r.coefficient),
                r.sample_size.to_string(),
                format_optional(r.p_value),
            ]
        }),
    )?;
    Ok(())
}

/// Score headlines, aggregate them per day and correlate with daily returns.
pub fn run_correlation(config: &AppConfig) -> NovaResult<CorrelationReport> {
    let engine = CorrelationEngine::new(config.correlation.clone())?;
    let scorer = SentimentScorer::default();
    let out = &config.paths.sentiment_output;

    info!(path = %config.paths.headlines.display(), "Loading headlines");
    let (records, _) = load_headlines(&config.paths.headlines)?;
    let universe = load_price_universe(&config.paths.prices_dir)?;

    let mut results = Vec::with_capacity(universe.len());
    let mut files = Vec::new();

    for (series, _) in &universe {
        let ticker = series.ticker.as_str();
        let daily = daily_sentiment(&records, ticker, &scorer);
        if daily.is_empty() {
            warn!(ticker, "No headlines for ticker");
        }

        let path = out.join(format!("{}_daily_sentiment.csv", ticker));
        write_daily_csv(&path, &daily)?;
        files.push(path);

        let result = engine.correlate(ticker, series, &daily);
        info!(
            ticker,
            days = daily.len(),
            pairs = result.sample_size,
            r = ?result.coefficient,
            "Correlation computed"
        );
        results.push(result);
    }

    let path = out.join("sentiment_correlation.csv");
    write_results_csv(&path, &results)?;
    files.push(path);

    Ok(CorrelationReport {
        headlines: records.len(),
        results,
        files,
    })
}
