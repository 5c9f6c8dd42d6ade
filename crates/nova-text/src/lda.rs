//! Latent Dirichlet Allocation fitted by collapsed Gibbs sampling.

use ndarray::{Array1, Array2};
use nova_core::error::TextError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::vectorizer::DocumentTermMatrix;

/// LDA model configuration.
#[derive(Debug, Clone)]
pub struct LdaConfig {
    /// Number of topics
    pub n_topics: usize,
    /// Document-topic prior
    pub alpha: f64,
    /// Topic-word prior
    pub beta: f64,
    /// Gibbs sweeps over the corpus
    pub iterations: usize,
    /// Random seed
    pub seed: u64,
}

impl Default for LdaConfig {
    fn default() -> Self {
        Self {
            n_topics: 6,
            alpha: 0.1,
            beta: 0.01,
            iterations: 200,
            seed: 42,
        }
    }
}

impl LdaConfig {
    pub fn new(n_topics: usize) -> Self {
        Self {
            n_topics,
            ..Default::default()
        }
    }

    pub fn alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// A fitted topic model.
///
/// Holds the final Gibbs counts: `topic_word` is topics x terms and
/// `doc_topic` is documents x topics.
#[derive(Debug, Clone)]
pub struct LdaModel {
    topic_word: Array2<u32>,
    doc_topic: Array2<u32>,
    doc_lengths: Array1<u32>,
}

impl LdaModel {
    /// Fit on a document-term matrix. Results depend only on the data and the seed.
    pub fn fit(dtm: &DocumentTermMatrix, config: &LdaConfig) -> Result<Self, TextError> {
        if config.n_topics == 0 {
            return Err(TextError::InvalidParameter(
                "n_topics must be positive".to_string(),
            ));
        }
        if config.alpha <= 0.0 || config.beta <= 0.0 {
            return Err(TextError::InvalidParameter(
                "alpha and beta must be positive".to_string(),
            ));
        }
        if dtm.n_docs() == 0 {
            return Err(TextError::EmptyCorpus);
        }

        let k = config.n_topics;
        let n_terms = dtm.n_terms();
        let n_docs = dtm.n_docs();
        let mut rng = StdRng::seed_from_u64(config.seed);

        // Expand sparse counts to one token per occurrence
        let tokens: Vec<Vec<usize>> = dtm
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .flat_map(|&(term, count)| std::iter::repeat(term).take(count))
                    .collect()
            })
            .collect();

        let mut topic_word = Array2::<u32>::zeros((k, n_terms));
        let mut topic_totals = Array1::<u32>::zeros(k);
        let mut doc_topic = Array2::<u32>::zeros((n_docs, k));
        let mut assignments: Vec<Vec<usize>> = Vec::with_capacity(n_docs);

        for (d, doc) in tokens.iter().enumerate() {
            let mut doc_assignments = Vec::with_capacity(doc.len());
            for &w in doc {
                let t = rng.gen_range(0..k);
                topic_word[[t, w]] += 1;
                topic_totals[t] += 1;
                doc_topic[[d, t]] += 1;
                doc_assignments.push(t);
            }
            assignments.push(doc_assignments);
        }

        let beta_sum = config.beta * n_terms as f64;
        let mut weights = Array1::<f64>::zeros(k);

        for _ in 0..config.iterations {
            for (d, doc) in tokens.iter().enumerate() {
                for (pos, &w) in doc.iter().enumerate() {
                    let old = assignments[d][pos];
                    topic_word[[old, w]] -= 1;
                    topic_totals[old] -= 1;
                    doc_topic[[d, old]] -= 1;

                    // The document-length denominator is constant across topics
                    let mut total = 0.0;
                    for (t, weight) in weights.iter_mut().enumerate() {
                        let word = (topic_word[[t, w]] as f64 + config.beta)
                            / (topic_totals[t] as f64 + beta_sum);
                        *weight = (doc_topic[[d, t]] as f64 + config.alpha) * word;
                        total += *weight;
                    }

                    let threshold = rng.gen::<f64>() * total;
                    let mut cumulative = 0.0;
                    let mut new = k - 1;
                    for (t, weight) in weights.iter().enumerate() {
                        cumulative += weight;
                        if cumulative >= threshold {
                            new = t;
                            break;
                        }
                    }

                    topic_word[[new, w]] += 1;
                    topic_totals[new] += 1;
                    doc_topic[[d, new]] += 1;
                    assignments[d][pos] = new;
                }
            }
        }

        debug!(
            topics = k,
            terms = n_terms,
            docs = n_docs,
            iterations = config.iterations,
            "LDA fitted"
        );

        Ok(Self {
            topic_word,
            doc_topic,
            doc_lengths: tokens.iter().map(|doc| doc.len() as u32).collect(),
        })
    }

    pub fn n_topics(&self) -> usize {
        self.topic_word.nrows()
    }

    /// Indices of the `n` heaviest terms of `topic`, ties broken by lower index.
    pub fn top_terms(&self, topic: usize, n: usize) -> Vec<usize> {
        let row = self.topic_word.row(topic);
        let mut order: Vec<usize> = (0..row.len()).collect();
        order.sort_by(|&a, &b| row[b].cmp(&row[a]).then(a.cmp(&b)));
        order.truncate(n);
        order
    }

    /// Topic holding most of a document's tokens, `None` for documents with no kept terms.
    pub fn dominant_topic(&self, doc: usize) -> Option<usize> {
        if self.doc_lengths.get(doc).copied().unwrap_or(0) == 0 {
            return None;
        }
        let row = self.doc_topic.row(doc);
        // Earliest topic wins ties
        let mut best = 0;
        for (t, &count) in row.iter().enumerate() {
            if count > row[best] {
                best = t;
            }
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorizer::CountVectorizer;
    use ndarray::Axis;

    fn corpus() -> Vec<String> {
        let mut docs = Vec::new();
        for i in 0..20 {
            docs.push(format!("earnings revenue profit quarter {}", i % 3));
            docs.push(format!("merger acquisition deal buyout {}", i % 3));
        }
        docs
    }

    #[test]
    fn test_fit_is_deterministic() {
        let dtm = CountVectorizer::new().fit_transform(&corpus()).unwrap();
        let config = LdaConfig::new(2).iterations(50).seed(7);

        let a = LdaModel::fit(&dtm, &config).unwrap();
        let b = LdaModel::fit(&dtm, &config).unwrap();
        for t in 0..2 {
            assert_eq!(a.top_terms(t, 4), b.top_terms(t, 4));
        }
        for d in 0..dtm.n_docs() {
            assert_eq!(a.dominant_topic(d), b.dominant_topic(d));
        }
    }

    #[test]
    fn test_separates_disjoint_vocabularies() {
        let dtm = CountVectorizer::new().fit_transform(&corpus()).unwrap();
        let model = LdaModel::fit(&dtm, &LdaConfig::new(2).iterations(100)).unwrap();

        let earnings = model.dominant_topic(0).unwrap();
        let merger = model.dominant_topic(1).unwrap();
        assert_ne!(earnings, merger);

        let top: Vec<&str> = model
            .top_terms(earnings, 4)
            .into_iter()
            .map(|i| dtm.terms[i].as_str())
            .collect();
        for term in ["earnings", "profit", "quarter", "revenue"] {
            assert!(top.contains(&term), "{:?}", top);
        }
    }

    #[test]
    fn test_counts_conserve_tokens() {
        let dtm = CountVectorizer::new().fit_transform(&corpus()).unwrap();
        let model = LdaModel::fit(&dtm, &LdaConfig::new(3).iterations(10)).unwrap();

        assert_eq!(model.topic_word.dim(), (3, dtm.n_terms()));
        assert_eq!(model.doc_topic.dim(), (dtm.n_docs(), 3));
        assert_eq!(model.n_topics(), 3);

        // Every token sits in exactly one topic
        let per_doc = model.doc_topic.sum_axis(Axis(1));
        assert_eq!(per_doc, model.doc_lengths);
        assert_eq!(model.topic_word.sum(), model.doc_lengths.sum());
    }

    #[test]
    fn test_rejects_zero_topics() {
        let dtm = CountVectorizer::new().fit_transform(&corpus()).unwrap();
        assert!(LdaModel::fit(&dtm, &LdaConfig::new(0)).is_err());
    }
}
