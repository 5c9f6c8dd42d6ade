//! Data sources and sinks for the analytics pipeline.

mod headlines;
mod prices;
mod writer;

pub use headlines::{parse_published_at, HeadlineCsvSource};
pub use prices::{discover_price_files, PriceCsvSource};
pub use writer::{format_optional, write_csv, write_json};

use nova_core::error::DataError;
use nova_core::types::{HeadlineRecord, PriceSeries};
use std::path::Path;

/// Rows accepted and rejected while loading one file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Load every headline from a CSV file.
pub fn load_headlines(path: &Path) -> Result<(Vec<HeadlineRecord>, LoadReport), DataError> {
    HeadlineCsvSource::new(path)?.load()
}

/// Load one ticker's price history from a CSV file.
pub fn load_prices(path: &Path, ticker: &str) -> Result<(PriceSeries, LoadReport), DataError> {
    PriceCsvSource::new(path)?.load(ticker)
}
