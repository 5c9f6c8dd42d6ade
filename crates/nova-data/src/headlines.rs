//! Headline CSV source.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use csv::{ReaderBuilder, StringRecord};
use nova_core::error::DataError;
use nova_core::types::HeadlineRecord;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::LoadReport;

/// Publisher recorded when the column is empty.
pub const UNKNOWN_PUBLISHER: &str = "Unknown";

/// CSV record format. Extra columns such as `url` or an unnamed index are ignored.
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(alias = "Headline", alias = "title", default)]
    headline: Option<String>,
    #[serde(alias = "Publisher", default)]
    publisher: Option<String>,
    #[serde(alias = "Date", alias = "published_at")]
    date: String,
    #[serde(alias = "Stock", alias = "ticker", alias = "symbol", default)]
    stock: Option<String>,
}

/// Parse a publication timestamp, normalizing to UTC.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS±HH:MM`, naive `YYYY-MM-DD HH:MM:SS`
/// (taken as UTC) and bare dates (midnight UTC).
pub fn parse_published_at(raw: &str) -> Result<DateTime<Utc>, DataError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"] {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Ok(dt.with_timezone(&Utc));
        }
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_time(chrono::NaiveTime::MIN).and_utc());
    }

    Err(DataError::ParseError(format!("Could not parse date: {}", raw)))
}

/// CSV source for the headline dataset.
pub struct HeadlineCsvSource {
    path: PathBuf,
}

impl HeadlineCsvSource {
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

    /// Load all well-formed rows; malformed ones are counted and skipped.
    pub fn load(&self) -> Result<(Vec<HeadlineRecord>, LoadReport), DataError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| DataError::Csv(e.to_string()))?;

        // Invalid UTF-8 becomes U+FFFD instead of failing the row
        let headers = reader
            .byte_headers()
            .map_err(|e| DataError::Csv(e.to_string()))?
            .clone();
        let headers = StringRecord::from_byte_record_lossy(headers);

        let mut records = Vec::new();
        let mut report = LoadReport::default();

        for result in reader.byte_records() {
            let row = result.map_err(|e| e.to_string()).and_then(|bytes| {
                StringRecord::from_byte_record_lossy(bytes)
                    .deserialize::<CsvRecord>(Some(&headers))
                    .map_err(|e| e.to_string())
            });
            let row = match row {
                Ok(row) => row,
                Err(_) => {
                    report.skipped += 1;
                    continue;
                }
            };
            let published_at = match parse_published_at(&row.date) {
                Ok(ts) => ts,
                Err(_) => {
                    report.skipped += 1;
                    continue;
                }
            };
            let publisher = row
                .publisher
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| UNKNOWN_PUBLISHER.to_string());

            records.push(HeadlineRecord::new(
                row.headline.unwrap_or_default(),
                publisher,
                published_at,
                row.stock.unwrap_or_default().trim(),
            ));
            report.loaded += 1;
        }

        if report.skipped > 0 {
            warn!(
                path = %self.path.display(),
                skipped = report.skipped,
                "Skipped malformed headline rows"
            );
        }
        info!(path = %self.path.display(), loaded = report.loaded, "Loaded headlines");

        Ok((records, report))
    }
}
