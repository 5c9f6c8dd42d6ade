//! Publisher activity and concentration.

use std::collections::HashMap;

use nova_core::types::HeadlineRecord;
use serde::{Deserialize, Serialize};

use crate::params::TextParams;

/// Concentration summary of articles across publishers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationStats {
    pub total_publishers: usize,
    pub total_articles: usize,
    /// Share of articles from the leading publishers, in percent
    pub top_10_percentage: f64,
    pub gini_coefficient: f64,
    pub concentration_interpretation: String,
}

/// Per-publisher and per-domain counts with the concentration summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublisherAnalysis {
    /// `(publisher, articles)` by count descending, then name
    pub publisher_counts: Vec<(String, usize)>,
    /// `(domain, articles)` in the same order
    pub domain_counts: Vec<(String, usize)>,
    pub concentration: ConcentrationStats,
}

/// Gini coefficient of non-negative counts, clamped to [0, 1].
///
/// Uses `2 * sum(i * x_i) / (n * sum(x)) - (n + 1) / n` over ascending values.
/// Empty or all-zero input yields 0.
pub fn gini(values: &[f64]) -> f64 {
    let total: f64 = values.iter().sum();
    if values.is_empty() || total <= 0.0 {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len() as f64;
    let weighted: f64 = sorted
        .iter()
        .enumerate()
        .map(|(i, x)| (i + 1) as f64 * x)
        .sum();
    (2.0 * weighted / (n * total) - (n + 1.0) / n).clamp(0.0, 1.0)
}

fn ranked(counts: HashMap<String, usize>) -> Vec<(String, usize)> {
    let mut ranked: Vec<(String, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Count articles per publisher and per e-mail domain.
pub fn publisher_analysis(records: &[HeadlineRecord], params: &TextParams) -> PublisherAnalysis {
    let mut publishers: HashMap<String, usize> = HashMap::new();
    let mut domains: HashMap<String, usize> = HashMap::new();
    for record in records {
        *publishers.entry(record.publisher.clone()).or_insert(0) += 1;
        *domains.entry(record.publisher_domain()).or_insert(0) += 1;
    }

    let publisher_counts = ranked(publishers);
    let domain_counts = ranked(domains);

    let total_articles = records.len();
    let top: usize = publisher_counts
        .iter()
        .take(params.top_publishers)
        .map(|(_, c)| c)
        .sum();
    let top_10_percentage = if total_articles == 0 {
        0.0
    } else {
        top as f64 / total_articles as f64 * 100.0
    };

    let counts: Vec<f64> = publisher_counts.iter().map(|(_, c)| *c as f64).collect();
    let gini_coefficient = gini(&counts);
    let concentration_interpretation = if gini_coefficient > params.concentration_threshold {
        "Highly concentrated"
    } else {
        "Moderately concentrated"
    };

    PublisherAnalysis {
        concentration: ConcentrationStats {
            total_publishers: publisher_counts.len(),
            total_articles,
            top_10_percentage,
            gini_coefficient,
            concentration_interpretation: concentration_interpretation.to_string(),
        },
        publisher_counts,
        domain_counts,
    }
}
