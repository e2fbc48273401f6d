//! Term frequencies of the seed, keyed by stem.

use indexmap::IndexMap;
use log::trace;

use crate::analysis::token_filter::Stemmer;

/// Occurrence count of each stem in the seed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermFrequencies {
    counts: IndexMap<String, u32>,
}

impl TermFrequencies {
    /// Stem and count the terms, then drop stems seen fewer than `threshold`
    /// times. A threshold of 0 or 1 keeps everything.
    ///
    /// ```
    /// use morelike::analysis::token_filter::PorterStemmer;
    /// use morelike::mlt::TermFrequencies;
    ///
    /// let terms: Vec<String> = ["node", "documents", "document", "node", "example"]
    ///     .iter()
    ///     .map(|t| t.to_string())
    ///     .collect();
    ///
    /// let tf = TermFrequencies::from_terms(&terms, &PorterStemmer::new(), 2);
    /// assert_eq!(tf.get("node"), Some(2));
    /// assert_eq!(tf.get("docum"), Some(2));
    /// assert_eq!(tf.get("exampl"), None);
    /// ```
    pub fn from_terms(terms: &[String], stemmer: &dyn Stemmer, threshold: u32) -> Self {
        let mut counts: IndexMap<String, u32> = IndexMap::new();
        for term in terms {
            *counts.entry(stemmer.stem(term)).or_insert(0) += 1;
        }

        if threshold > 1 {
            let before = counts.len();
            counts = counts
                .into_iter()
                .filter(|(_, count)| *count >= threshold)
                .collect();
            trace!(
                "threshold {threshold} kept {} of {before} stems",
                counts.len()
            );
        }

        TermFrequencies { counts }
    }

    /// Count of a stem.
    pub fn get(&self, stem: &str) -> Option<u32> {
        self.counts.get(stem).copied()
    }

    pub fn contains(&self, stem: &str) -> bool {
        self.counts.contains_key(stem)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, u32> {
        &self.counts
    }
}

impl From<IndexMap<String, u32>> for TermFrequencies {
    fn from(counts: IndexMap<String, u32>) -> Self {
        TermFrequencies { counts }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::PorterStemmer;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_stems() {
        let tf = TermFrequencies::from_terms(
            &terms(&["node", "document", "good", "example", "document", "node"]),
            &PorterStemmer::new(),
            1,
        );

        let expected: Vec<(&str, u32)> =
            vec![("node", 2), ("docum", 2), ("good", 1), ("exampl", 1)];
        assert_eq!(tf.iter().collect::<Vec<_>>(), expected);
        assert_eq!(tf.len(), 4);
    }

    #[test]
    fn test_threshold() {
        let words = terms(&["engineering", "engineer", "computer", "college"]);
        let stemmer = PorterStemmer::new();

        let tf = TermFrequencies::from_terms(&words, &stemmer, 2);
        assert_eq!(tf.iter().collect::<Vec<_>>(), vec![("engin", 2)]);

        let tf = TermFrequencies::from_terms(&words, &stemmer, 3);
        assert!(tf.is_empty());

        // 0 behaves like 1
        assert_eq!(TermFrequencies::from_terms(&words, &stemmer, 0).len(), 3);
    }

    #[test]
    fn test_empty() {
        let tf = TermFrequencies::from_terms(&[], &PorterStemmer::new(), 1);
        assert!(tf.is_empty());
        assert!(!tf.contains("node"));
    }
}
