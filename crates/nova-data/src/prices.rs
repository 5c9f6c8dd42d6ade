//! Per-ticker price CSV source.

use chrono::NaiveDate;
use csv::ReaderBuilder;
use nova_core::error::DataError;
use nova_core::types::{PriceBar, PriceSeries};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::LoadReport;

/// CSV record format.
///
/// Numeric cells that are blank or unparseable come through as `None`.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Date", alias = "date", alias = "timestamp", alias = "Timestamp")]
    date: String,
    #[serde(alias = "Open", alias = "open", default, deserialize_with = "coerce_f64")]
    open: Option<f64>,
    #[serde(alias = "High", alias = "high", default, deserialize_with = "coerce_f64")]
    high: Option<f64>,
    #[serde(alias = "Low", alias = "low", default, deserialize_with = "coerce_f64")]
    low: Option<f64>,
    #[serde(alias = "Close", alias = "close", default, deserialize_with = "coerce_f64")]
    close: Option<f64>,
    #[serde(alias = "Volume", alias = "volume", default, deserialize_with = "coerce_f64")]
    volume: Option<f64>,
}

fn coerce_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()))
}

fn parse_date(raw: &str) -> Result<NaiveDate, DataError> {
    let raw = raw.trim();
    // Timestamps such as `2020-01-02 00:00:00` keep only the date part
    let date_part = raw.split([' ', 'T']).next().unwrap_or(raw);
    for format in ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(date_part, format) {
            return Ok(d);
        }
    }
    Err(DataError::ParseError(format!("Could not parse date: {}", raw)))
}

/// List `<ticker>.csv` files in a directory, sorted by ticker.
///
/// The ticker is the upper-cased file stem.
pub fn discover_price_files(dir: &Path) -> Result<Vec<(String, PathBuf)>, DataError> {
    if !dir.is_dir() {
        return Err(DataError::NotFound(dir.display().to_string()));
    }

    let mut files: Vec<(String, PathBuf)> = std::fs::read_dir(dir)
        .map_err(|e| DataError::NotFound(format!("{}: {}", dir.display(), e)))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .filter_map(|path| {
            let stem = path.file_stem()?.to_str()?.to_uppercase();
            Some((stem, path))
        })
        .collect();
    files.sort();

    debug!(dir = %dir.display(), files = files.len(), "Discovered price files");
    Ok(files)
}

/// CSV source for one ticker's daily bars.
pub struct PriceCsvSource {
    path: PathBuf,
}

impl PriceCsvSource {
    /// Create a source, failing if the file does not exist.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(DataError::NotFound(path.display().to_string()));
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    /// Load bars sorted by date. Duplicate dates keep the first row in file order.
    ///
    /// Rows without a usable date or close are skipped.
    pub fn load(&self, ticker: &str) -> Result<(PriceSeries, LoadReport), DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::Csv(e.to_string()))?;

        let mut bars = Vec::new();
        let mut report = LoadReport::default();

        for result in reader.deserialize::<CsvRecord>() {
            let parsed = result
                .map_err(|e| DataError::ParseError(e.to_string()))
                .and_then(|r| parse_date(&r.date).map(|date| (date, r)));
            match parsed {
                // Only the close is required, other fields fall back to NaN
                Ok((date, CsvRecord { close: Some(close), open, high, low, volume, .. }))
                    if close.is_finite() =>
                {
                    let nan = |v: Option<f64>| v.unwrap_or(f64::NAN);
                    bars.push(PriceBar::new(
                        ticker,
                        date,
                        nan(open),
                        nan(high),
                        nan(low),
                        close,
                        nan(volume),
                    ));
                }
                _ => report.skipped += 1,
            }
        }

        // Stable sort, so the first row for a date survives the dedup
        bars.sort_by_key(|b| b.date);
        let before = bars.len();
        bars.dedup_by_key(|b| b.date);
        report.skipped += before - bars.len();
        report.loaded = bars.len();

        if report.skipped > 0 {
            warn!(
                ticker,
                path = %self.path.display(),
                skipped = report.skipped,
                "Skipped malformed or duplicate price rows"
            );
        }

        Ok((PriceSeries::new(ticker, bars)?, report))
    }
}
