//! Error types for the analytics pipeline.

use thiserror::Error;

/// Top-level pipeline error.
#[derive(Error, Debug)]
pub enum NovaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Data error: {0}")]
    Data(#[from] DataError),

    #[error("Indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    #[error("Text analytics error: {0}")]
    Text(#[from] TextError),

    #[error("Correlation error: {0}")]
    Correlation(#[from] CorrelationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Data loading and writing errors.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("Input not found: {0}")]
    NotFound(String),

    #[error("No data available in {0}")]
    NoDataAvailable(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Bars for {ticker} are not strictly increasing at {date}")]
    UnorderedBars { ticker: String, date: String },

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Write error: {0}")]
    Write(String),
}

/// Indicator calculation errors.
#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Text analytics errors.
#[derive(Error, Debug)]
pub enum TextError {
    #[error("Corpus is empty")]
    EmptyCorpus,

    #[error("Vocabulary is empty after applying min_df={min_df} and max_df={max_df}")]
    EmptyVocabulary { min_df: usize, max_df: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Correlation engine errors.
#[derive(Error, Debug)]
pub enum CorrelationError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for pipeline operations.
pub type NovaResult<T> = Result<T, NovaError>;
