//! TF-IDF weights of the seed's surface terms.

use indexmap::IndexMap;
use log::trace;

use crate::analysis::token_filter::Stemmer;
use crate::mlt::df::{idf, DocumentFrequencies};
use crate::mlt::tf::TermFrequencies;

/// Weight of each surviving surface term.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfScores {
    scores: IndexMap<String, f64>,
}

impl TfIdfScores {
    /// Weigh every discriminative term of `df` by the frequency of its stem
    /// in `tf`.
    ///
    /// Terms are visited in `df` order. A term whose stem is not in `tf`,
    /// for instance because the frequency threshold removed it, is skipped.
    /// At most `term_count_limit` terms are kept. An empty corpus yields no
    /// scores.
    pub fn compute(
        tf: &TermFrequencies,
        df: &DocumentFrequencies,
        stemmer: &dyn Stemmer,
        term_count_limit: usize,
    ) -> Self {
        let corpus_size = df.corpus_size();
        let mut scores = IndexMap::new();
        if corpus_size == 0 {
            return TfIdfScores { scores };
        }

        for (term, matching) in df.iter() {
            if scores.len() >= term_count_limit {
                break;
            }
            if !df.is_discriminative(term) {
                continue;
            }
            let Some(frequency) = tf.get(&stemmer.stem(term)) else {
                trace!("'{term}' has no term frequency, skipping");
                continue;
            };
            scores.insert(term.to_string(), idf(corpus_size, matching) * frequency as f64);
        }

        TfIdfScores { scores }
    }

    pub fn get(&self, term: &str) -> Option<f64> {
        self.scores.get(term).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, f64> {
        &self.scores
    }

    /// The smallest weight.
    pub fn min_score(&self) -> Option<f64> {
        self.scores.values().copied().reduce(f64::min)
    }
}

impl From<IndexMap<String, f64>> for TfIdfScores {
    fn from(scores: IndexMap<String, f64>) -> Self {
        TfIdfScores { scores }
    }
}

impl<const N: usize> From<[(&str, f64); N]> for TfIdfScores {
    fn from(scores: [(&str, f64); N]) -> Self {
        TfIdfScores {
            scores: scores.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::PorterStemmer;

    fn seed_tf(threshold: u32) -> TermFrequencies {
        let terms: Vec<String> = ["node", "document", "good", "example", "document", "node"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        TermFrequencies::from_terms(&terms, &PorterStemmer::new(), threshold)
    }

    fn seed_df() -> DocumentFrequencies {
        DocumentFrequencies::new(
            4,
            IndexMap::from([
                ("node".to_string(), 3),
                ("document".to_string(), 4),
                ("good".to_string(), 0),
                ("example".to_string(), 1),
            ]),
        )
    }

    #[test]
    fn test_compute() {
        let scores = TfIdfScores::compute(&seed_tf(1), &seed_df(), &PorterStemmer::new(), 25);

        assert_eq!(scores.len(), 2);
        assert_eq!(scores.get("node"), Some((4.0f64 / 3.0).ln() * 2.0));
        assert_eq!(scores.get("example"), Some(4f64.ln()));
        assert_eq!(
            scores.iter().map(|(t, _)| t).collect::<Vec<_>>(),
            vec!["node", "example"]
        );
        assert_eq!(scores.min_score(), Some((4.0f64 / 3.0).ln() * 2.0));
    }

    #[test]
    fn test_missing_frequency_is_skipped() {
        let scores = TfIdfScores::compute(&seed_tf(2), &seed_df(), &PorterStemmer::new(), 25);

        assert_eq!(scores.iter().map(|(t, _)| t).collect::<Vec<_>>(), vec!["node"]);
        assert!(scores.iter().all(|(_, s)| s.is_finite() && s > 0.0));
    }

    #[test]
    fn test_term_count_limit() {
        let scores = TfIdfScores::compute(&seed_tf(1), &seed_df(), &PorterStemmer::new(), 1);
        assert_eq!(scores.iter().map(|(t, _)| t).collect::<Vec<_>>(), vec!["node"]);
    }

    #[test]
    fn test_empty_corpus() {
        let df = DocumentFrequencies::new(0, IndexMap::new());
        let scores = TfIdfScores::compute(&seed_tf(1), &df, &PorterStemmer::new(), 25);
        assert!(scores.is_empty());
        assert_eq!(scores.min_score(), None);

        // term counts taken before the collection emptied
        let skewed = DocumentFrequencies::new(
            0,
            IndexMap::from([("node".to_string(), 2), ("example".to_string(), 1)]),
        );
        let scores = TfIdfScores::compute(&seed_tf(1), &skewed, &PorterStemmer::new(), 25);
        assert!(scores.is_empty());
        assert!(matches!(
            crate::mlt::make_query(&scores),
            Err(crate::error::MoreLikeError::EmptyScore)
        ));
    }
}
