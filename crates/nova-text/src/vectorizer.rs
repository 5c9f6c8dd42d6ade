//! Count vectorization with document-frequency pruning.

use std::collections::{BTreeMap, HashSet};

use nova_core::error::TextError;

use crate::tokenizer::Tokenizer;

/// Sparse bag of terms for one document: `(term index, count)` sorted by index.
pub type SparseDoc = Vec<(usize, usize)>;

/// Document-term counts over a pruned, alphabetically ordered vocabulary.
#[derive(Debug, Clone)]
pub struct DocumentTermMatrix {
    /// Index to term
    pub terms: Vec<String>,
    /// One sparse row per input document, possibly empty
    pub rows: Vec<SparseDoc>,
}

impl DocumentTermMatrix {
    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn n_docs(&self) -> usize {
        self.rows.len()
    }

    /// Total number of term occurrences across the corpus.
    pub fn total_tokens(&self) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter().map(|(_, count)| *count))
            .sum()
    }
}

/// Bag-of-n-grams vectorizer.
///
/// A term is kept when it appears in at least `min_df` documents and in no
/// more than `max_df * n_docs` documents.
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    tokenizer: Tokenizer,
    min_df: usize,
    max_df: f64,
    max_ngram: usize,
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

impl CountVectorizer {
    /// Unigram vectorizer with no pruning and English stop words.
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            min_df: 1,
            max_df: 1.0,
            max_ngram: 1,
        }
    }

    /// Set minimum document count.
    pub fn min_df(mut self, min_df: usize) -> Self {
        self.min_df = min_df;
        self
    }

    /// Set maximum document share.
    pub fn max_df(mut self, max_df: f64) -> Self {
        self.max_df = max_df;
        self
    }

    /// Set longest n-gram.
    pub fn max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram.max(1);
        self
    }

    /// Set the tokenizer.
    pub fn tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Unigrams through `max_ngram`-grams of one document, space-joined.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        let tokens = self.tokenizer.tokenize(text);
        let mut grams = tokens.clone();
        for n in 2..=self.max_ngram {
            grams.extend(tokens.windows(n).map(|w| w.join(" ")));
        }
        grams
    }

    /// Build the vocabulary and count matrix for `docs`.
    pub fn fit_transform<S: AsRef<str>>(&self, docs: &[S]) -> Result<DocumentTermMatrix, TextError> {
        if docs.is_empty() {
            return Err(TextError::EmptyCorpus);
        }

        let analyzed: Vec<Vec<String>> = docs.iter().map(|d| self.analyze(d.as_ref())).collect();

        let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
        for grams in &analyzed {
            let unique: HashSet<&str> = grams.iter().map(String::as_str).collect();
            for gram in unique {
                *doc_freq.entry(gram).or_insert(0) += 1;
            }
        }

        let max_count = self.max_df * analyzed.len() as f64;
        // BTreeMap iteration keeps the vocabulary alphabetical
        let terms: Vec<String> = doc_freq
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df && (*df as f64) <= max_count)
            .map(|(term, _)| term.to_string())
            .collect();

        if terms.is_empty() {
            return Err(TextError::EmptyVocabulary {
                min_df: self.min_df,
                max_df: self.max_df,
            });
        }

        let index: BTreeMap<&str, usize> = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.as_str(), i))
            .collect();

        let rows = analyzed
            .iter()
            .map(|grams| {
                let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
                for gram in grams {
                    if let Some(&idx) = index.get(gram.as_str()) {
                        *counts.entry(idx).or_insert(0) += 1;
                    }
                }
                counts.into_iter().collect()
            })
            .collect();

        Ok(DocumentTermMatrix { terms, rows })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigrams_after_stop_word_removal() {
        let vectorizer = CountVectorizer::new().max_ngram(2);
        assert_eq!(
            vectorizer.analyze("Shares of Tesla rally"),
            vec!["shares", "tesla", "rally", "shares tesla", "tesla rally"]
        );
    }

    #[test]
    fn test_vocabulary_is_alphabetical_and_pruned() {
        let docs = [
            "earnings beat estimates",
            "earnings miss estimates",
            "earnings guidance raised",
            "analyst upgrade",
        ];
        let dtm = CountVectorizer::new()
            .min_df(2)
            .max_df(0.7)
            .fit_transform(&docs)
            .unwrap();

        // "earnings" appears in 3/4 documents, above the 0.7 share
        assert_eq!(dtm.terms, vec!["estimates"]);
        assert_eq!(dtm.n_docs(), 4);
        assert_eq!(dtm.rows[0], vec![(0, 1)]);
        assert!(dtm.rows[3].is_empty());
        assert_eq!(dtm.total_tokens(), 2);
    }

    #[test]
    fn test_counts_repeated_terms() {
        let dtm = CountVectorizer::new()
            .fit_transform(&["buy buy sell", "sell"])
            .unwrap();
        assert_eq!(dtm.terms, vec!["buy", "sell"]);
        assert_eq!(dtm.rows[0], vec![(0, 2), (1, 1)]);
        assert_eq!(dtm.rows[1], vec![(1, 1)]);
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [&str; 0] = [];
        assert!(matches!(
            CountVectorizer::new().fit_transform(&empty),
            Err(TextError::EmptyCorpus)
        ));
        assert!(matches!(
            CountVectorizer::new().min_df(5).fit_transform(&["one headline"]),
            Err(TextError::EmptyVocabulary { min_df: 5, .. })
        ));
    }
}
