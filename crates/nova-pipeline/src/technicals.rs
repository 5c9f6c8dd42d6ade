//! Technical indicators for every ticker in the price directory.

use nova_config::AppConfig;
use nova_core::error::{DataError, NovaResult};
use nova_core::types::{IndicatorSeries, PriceSeries};
use nova_data::{discover_price_files, format_optional, load_prices, write_csv};
use nova_indicators::{IndicatorEngine, TechnicalSummary};
use std::path::Path;
use tracing::info;

use crate::report::{TechnicalsReport, TickerRun};

/// Load every `<ticker>.csv` in `dir`, sorted by ticker.
///
/// A missing directory is [`DataError::NotFound`]; a directory without price
/// files is [`DataError::NoDataAvailable`].
pub fn load_price_universe(dir: &Path) -> NovaResult<Vec<(PriceSeries, TickerRun)>> {
    let files = discover_price_files(dir)?;
    if files.is_empty() {
        return Err(DataError::NoDataAvailable(dir.display().to_string()).into());
    }

    let mut universe = Vec::with_capacity(files.len());
    for (ticker, path) in files {
        let (series, load) = load_prices(&path, &ticker)?;
        info!(ticker = %ticker, bars = series.len(), "Loaded prices");
        universe.push((
            series,
            TickerRun {
                ticker,
                rows: load.loaded,
                skipped_rows: load.skipped,
            },
        ));
    }
    Ok(universe)
}

fn write_ticker_csv(path: &Path, series: &PriceSeries, indicators: &IndicatorSeries) -> NovaResult<()> {
    let mut headers = vec!["Date", "Open", "High", "Low", "Close", "Volume"];
    headers.extend(indicators.column_names());

    let rows = series.iter().enumerate().map(|(i, bar)| {
        let mut row = vec![
            bar.date.to_string(),
            format_optional(Some(bar.open)),
            format_optional(Some(bar.high)),
            format_optional(Some(bar.low)),
            format_optional(Some(bar.close)),
            format_optional(Some(bar.volume)),
        ];
        row.extend(indicators.row(i).into_iter().map(format_optional));
        row
    });

    write_csv(path, &headers, rows)?;
    Ok(())
}

fn write_summary_csv(path: &Path, summaries: &[TechnicalSummary]) -> NovaResult<()> {
    let metric_names: Vec<&str> = summaries
        .first()
        .map(|s| s.metrics.iter().map(|(name, _)| name.as_str()).collect())
        .unwrap_or_default();
    let mut headers = vec!["ticker", "date", "close"];
    headers.extend(metric_names);

    let rows = summaries.iter().map(|summary| {
        let mut row = vec![
            summary.ticker.clone(),
            summary.date.map(|d| d.to_string()).unwrap_or_default(),
            format_optional(summary.close),
        ];
        row.extend(summary.metrics.iter().map(|(_, value)| format_optional(*value)));
        row
    });

    write_csv(path, &headers, rows)?;
    Ok(())
}

/// Compute indicators per ticker and write them under `paths.technicals_output`.
pub fn run_technicals(config: &AppConfig) -> NovaResult<TechnicalsReport> {
    let engine = IndicatorEngine::new(config.indicators.clone())?;
    let out = &config.paths.technicals_output;

    let universe = load_price_universe(&config.paths.prices_dir)?;

    let mut tickers = Vec::with_capacity(universe.len());
    let mut summaries = Vec::with_capacity(universe.len());
    let mut files = Vec::new();

    for (series, run) in universe {
        let indicators = engine.compute(&series);
        let path = out.join(format!("{}_technicals.csv", series.ticker));
        write_ticker_csv(&path, &series, &indicators)?;
        files.push(path);

        let summary = engine.summarize(&series, &indicators);
        info!(
            ticker = %series.ticker,
            date = ?summary.date,
            "Indicators computed"
        );
        summaries.push(summary);
        tickers.push(run);
    }

    let path = out.join("technical_summary.csv");
    write_summary_csv(&path, &summaries)?;
    files.push(path);

    Ok(TechnicalsReport {
        tickers,
        summaries,
        files,
    })
}
