//! Date-aligned indicator output.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One named indicator column aligned with the series dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorColumn {
    /// Column name, e.g. `SMA_20`
    pub name: String,
    /// One value per date; `None` while the window is still filling
    pub values: Vec<Option<f64>>,
}

impl IndicatorColumn {
    /// Number of leading missing values.
    pub fn leading_missing(&self) -> usize {
        self.values.iter().take_while(|v| v.is_none()).count()
    }
}

/// Indicator values for one ticker, keyed by (date, indicator name).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSeries {
    /// Ticker symbol
    pub ticker: String,
    /// Trading dates, identical to the source price series
    pub dates: Vec<NaiveDate>,
    columns: Vec<IndicatorColumn>,
}

impl IndicatorSeries {
    /// Create an empty series over the given dates.
    pub fn new(ticker: impl Into<String>, dates: Vec<NaiveDate>) -> Self {
        Self {
            ticker: ticker.into(),
            dates,
            columns: Vec::new(),
        }
    }

    /// Append a column. Values are truncated or padded with `None` to the date count.
    pub fn push_column(&mut self, name: impl Into<String>, mut values: Vec<Option<f64>>) {
        values.resize(self.dates.len(), None);
        self.columns.push(IndicatorColumn {
            name: name.into(),
            values,
        });
    }

    /// Number of rows (dates).
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Check if the series has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// All columns in insertion order.
    pub fn columns(&self) -> &[IndicatorColumn] {
        &self.columns
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&IndicatorColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value of `name` at row `index`, `None` when missing or unknown.
    pub fn value(&self, name: &str, index: usize) -> Option<f64> {
        self.column(name)
            .and_then(|c| c.values.get(index).copied().flatten())
    }

    /// All values for row `index`, in column order.
    pub fn row(&self, index: usize) -> Vec<Option<f64>> {
        self.columns
            .iter()
            .map(|c| c.values.get(index).copied().flatten())
            .collect()
    }

    /// Index of the last row on which every column is defined.
    pub fn last_complete_row(&self) -> Option<usize> {
        (0..self.len())
            .rev()
            .find(|&i| self.columns.iter().all(|c| c.values[i].is_some()))
    }
}
