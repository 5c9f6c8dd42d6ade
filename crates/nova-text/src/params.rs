//! Tunable parameters for the text analytics stages.

use nova_core::error::TextError;
use serde::{Deserialize, Serialize};

/// Parameters for the descriptive headline analyses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextParams {
    /// Maximum number of values fed to the normality test
    pub normality_sample_size: usize,
    /// Significance level for the normality and uniformity tests
    pub significance: f64,
    /// Number of leading publishers used for the top-share metric
    pub top_publishers: usize,
    /// Gini above which publishing is reported as highly concentrated
    pub concentration_threshold: f64,
    /// Seed for sampling
    pub seed: u64,
}

impl Default for TextParams {
    fn default() -> Self {
        Self {
            normality_sample_size: 5000,
            significance: 0.05,
            top_publishers: 10,
            concentration_threshold: 0.7,
            seed: 42,
        }
    }
}

impl TextParams {
    pub fn validate(&self) -> Result<(), TextError> {
        if !(self.significance > 0.0 && self.significance < 1.0) {
            return Err(TextError::InvalidParameter(format!(
                "significance must be in (0, 1), got {}",
                self.significance
            )));
        }
        if self.normality_sample_size < 8 {
            return Err(TextError::InvalidParameter(
                "normality_sample_size must be at least 8".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for vectorization and LDA.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicParams {
    /// Number of topics
    pub n_topics: usize,
    /// Keywords reported per topic
    pub top_n: usize,
    /// Minimum number of documents a term must appear in
    pub min_df: usize,
    /// Maximum share of documents a term may appear in
    pub max_df: f64,
    /// Longest n-gram extracted (1 = unigrams only)
    pub max_ngram: usize,
    /// Gibbs sampling sweeps over the corpus
    pub iterations: usize,
    /// Document-topic prior
    pub alpha: f64,
    /// Topic-word prior
    pub beta: f64,
    /// Sampler seed
    pub seed: u64,
}

impl Default for TopicParams {
    fn default() -> Self {
        Self {
            n_topics: 6,
            top_n: 10,
            min_df: 25,
            max_df: 0.7,
            max_ngram: 2,
            iterations: 200,
            alpha: 0.1,
            beta: 0.01,
            seed: 42,
        }
    }
}

impl TopicParams {
    pub fn validate(&self) -> Result<(), TextError> {
        if self.n_topics == 0 {
            return Err(TextError::InvalidParameter(
                "n_topics must be positive".to_string(),
            ));
        }
        if self.top_n == 0 || self.max_ngram == 0 {
            return Err(TextError::InvalidParameter(
                "top_n and max_ngram must be positive".to_string(),
            ));
        }
        if !(self.max_df > 0.0 && self.max_df <= 1.0) {
            return Err(TextError::InvalidParameter(format!(
                "max_df must be in (0, 1], got {}",
                self.max_df
            )));
        }
        if self.alpha <= 0.0 || self.beta <= 0.0 {
            return Err(TextError::InvalidParameter(
                "alpha and beta must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
