//! Topic extraction over headlines.

use nova_core::error::TextError;
use nova_core::types::HeadlineRecord;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::lda::{LdaConfig, LdaModel};
use crate::params::TopicParams;
use crate::vectorizer::CountVectorizer;

/// A topic and its highest-weight terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// 1-based topic number
    pub topic: usize,
    pub keywords: Vec<String>,
}

/// Result of topic extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopicReport {
    pub topics: Vec<Topic>,
    /// Headlines whose dominant topic is each topic, same order as `topics`
    pub document_counts: Vec<usize>,
    /// Size of the pruned vocabulary
    pub vocabulary_size: usize,
    /// Headlines with no term left after pruning
    pub unassigned: usize,
}

/// Vectorize the headlines and fit an LDA model.
pub fn extract_topics(
    records: &[HeadlineRecord],
    params: &TopicParams,
) -> Result<TopicReport, TextError> {
    params.validate()?;
    if records.is_empty() {
        return Err(TextError::EmptyCorpus);
    }

    let docs: Vec<&str> = records.iter().map(|r| r.headline.as_str()).collect();
    let dtm = CountVectorizer::new()
        .min_df(params.min_df)
        .max_df(params.max_df)
        .max_ngram(params.max_ngram)
        .fit_transform(&docs)?;

    let config = LdaConfig::new(params.n_topics)
        .alpha(params.alpha)
        .beta(params.beta)
        .iterations(params.iterations)
        .seed(params.seed);
    let model = LdaModel::fit(&dtm, &config)?;

    let topics: Vec<Topic> = (0..model.n_topics())
        .map(|t| Topic {
            topic: t + 1,
            keywords: model
                .top_terms(t, params.top_n)
                .into_iter()
                .map(|i| dtm.terms[i].clone())
                .collect(),
        })
        .collect();

    let mut document_counts = vec![0; model.n_topics()];
    let mut unassigned = 0;
    for d in 0..dtm.n_docs() {
        match model.dominant_topic(d) {
            Some(t) => document_counts[t] += 1,
            None => unassigned += 1,
        }
    }

    info!(
        topics = topics.len(),
        vocabulary = dtm.n_terms(),
        unassigned,
        "Topic extraction complete"
    );

    Ok(TopicReport {
        topics,
        document_counts,
        vocabulary_size: dtm.n_terms(),
        unassigned,
    })
}
