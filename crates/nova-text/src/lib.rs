//! Text analytics over the headline collection.
//!
//! - [`lengths`]: character/word length statistics with a normality test
//! - [`publishers`]: publisher and domain counts, Gini concentration
//! - [`temporal`]: daily/hourly/weekday counts with a uniformity test
//! - [`topics`]: count vectorization and LDA topic extraction
//! - [`sentiment`]: lexicon polarity scoring and daily aggregation

pub mod lda;
pub mod lengths;
pub mod params;
pub mod publishers;
pub mod sentiment;
pub mod stats;
pub mod temporal;
pub mod tokenizer;
pub mod topics;
pub mod vectorizer;

pub use lengths::{length_statistics, DistributionStats, LengthStatistics};
pub use params::{TextParams, TopicParams};
pub use publishers::{gini, publisher_analysis, ConcentrationStats, PublisherAnalysis};
pub use sentiment::{daily_sentiment, FinancialLexicon, SentimentScorer};
pub use stats::Describe;
pub use temporal::{temporal_analysis, TemporalAnalysis, TimeSeriesStatistics};
pub use topics::{extract_topics, Topic, TopicReport};
