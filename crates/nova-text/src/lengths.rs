//! Headline length statistics.

use nova_core::types::HeadlineRecord;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

use crate::params::TextParams;
use crate::stats::{excess_kurtosis, normal_test, quantile, skewness, Describe};
use crate::tokenizer::word_count;

/// Shape of one length distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistributionStats {
    pub mean: f64,
    pub median: f64,
    pub std: f64,
    pub skewness: Option<f64>,
    pub kurtosis: Option<f64>,
    /// `None` when the normality test cannot run
    pub is_normal: Option<bool>,
    pub p_value_normality: Option<f64>,
}

/// Character and word length statistics over a headline collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthStatistics {
    pub char_describe: Option<Describe>,
    pub word_describe: Option<Describe>,
    pub char_length: Option<DistributionStats>,
    pub word_length: Option<DistributionStats>,
}

impl LengthStatistics {
    /// `(statistic, chars, words)` rows for the describe table.
    pub fn describe_rows(&self) -> Vec<(&'static str, f64, f64)> {
        match (&self.char_describe, &self.word_describe) {
            (Some(chars), Some(words)) => chars
                .rows()
                .iter()
                .zip(words.rows().iter())
                .map(|((label, c), (_, w))| (*label, *c, *w))
                .collect(),
            _ => Vec::new(),
        }
    }
}

fn distribution(values: &[f64], params: &TextParams, rng: &mut StdRng) -> Option<DistributionStats> {
    if values.is_empty() {
        return None;
    }

    let sample: Vec<f64> = if values.len() > params.normality_sample_size {
        rand::seq::index::sample(rng, values.len(), params.normality_sample_size)
            .into_iter()
            .map(|i| values[i])
            .collect()
    } else {
        values.to_vec()
    };
    let test = normal_test(&sample);

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(DistributionStats {
        mean: values.iter().mean(),
        median: quantile(&sorted, 0.5),
        std: if values.len() > 1 {
            values.iter().std_dev()
        } else {
            f64::NAN
        },
        skewness: skewness(values),
        kurtosis: excess_kurtosis(values),
        is_normal: test.map(|t| t.p_value > params.significance),
        p_value_normality: test.map(|t| t.p_value),
    })
}

/// Length statistics for every headline. Empty input yields all `None`.
pub fn length_statistics(records: &[HeadlineRecord], params: &TextParams) -> LengthStatistics {
    let chars: Vec<f64> = records.iter().map(|r| r.char_len() as f64).collect();
    let words: Vec<f64> = records
        .iter()
        .map(|r| word_count(&r.headline) as f64)
        .collect();

    let mut rng = StdRng::seed_from_u64(params.seed);
    LengthStatistics {
        char_describe: Describe::of(&chars),
        word_describe: Describe::of(&words),
        char_length: distribution(&chars, params, &mut rng),
        word_length: distribution(&words, params, &mut rng),
    }
}
