//! Corpus-wide document frequencies of the seed's terms.
//!
//! One count of the whole collection plus one text-search count per unique
//! term are issued together and awaited as a single join. Each count yields
//! its own `(term, count)` pair; the map is built only after every count
//! has returned, in the order the terms first appear in the seed. The first
//! failing count fails the join and drops the others still in flight.

use futures::future::try_join_all;
use indexmap::IndexMap;
use log::{debug, trace, warn};

use crate::error::{MoreLikeError, Result};
use crate::mlt::terms::unique_terms;
use crate::storage::{CountFilter, DocumentStore};

/// Number of corpus documents matching each surface term.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentFrequencies {
    corpus_size: u64,
    matching: IndexMap<String, u64>,
}

impl DocumentFrequencies {
    pub fn new(corpus_size: u64, matching: IndexMap<String, u64>) -> Self {
        DocumentFrequencies {
            corpus_size,
            matching,
        }
    }

    /// Number of documents in the collection.
    pub fn corpus_size(&self) -> u64 {
        self.corpus_size
    }

    /// Number of documents matching a term.
    pub fn get(&self, term: &str) -> Option<u64> {
        self.matching.get(term).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.matching.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.matching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }

    pub fn as_map(&self) -> &IndexMap<String, u64> {
        &self.matching
    }

    /// Whether a term discriminates: it occurs somewhere, but not everywhere.
    /// An empty corpus has no discriminative terms.
    pub fn is_discriminative(&self, term: &str) -> bool {
        self.corpus_size > 0
            && self
                .get(term)
                .is_some_and(|m| m > 0 && m != self.corpus_size)
    }

    /// Inverse document frequency `ln(C / m)` of every term with
    /// `0 < m < C`. Terms outside that range are left out, and an empty
    /// corpus yields an empty map.
    pub fn idf(&self) -> IndexMap<String, f64> {
        self.matching
            .iter()
            .filter(|(term, _)| self.is_discriminative(term))
            .map(|(term, m)| (term.clone(), idf(self.corpus_size, *m)))
            .collect()
    }
}

/// `ln(corpus_size / matching)`.
pub fn idf(corpus_size: u64, matching: u64) -> f64 {
    (corpus_size as f64 / matching as f64).ln()
}

/// Count the collection and every unique term concurrently.
///
/// The collection count is issued even without terms.
pub async fn count_document_frequencies<S>(
    store: &S,
    terms: &[String],
) -> Result<DocumentFrequencies>
where
    S: DocumentStore + ?Sized,
{
    let unique = unique_terms(terms);

    let corpus = store.count(&CountFilter::All);
    let per_term = try_join_all(unique.iter().map(|term| async move {
        let count = store.count(&CountFilter::Text(term.clone())).await?;
        trace!("'{term}' matches {count} documents");
        Ok::<_, MoreLikeError>((term.clone(), count))
    }));

    let (corpus_size, counts) = futures::try_join!(corpus, per_term).map_err(|err| {
        warn!("document frequency counting failed: {err}");
        err
    })?;

    debug!(
        "counted {} terms against a corpus of {corpus_size}",
        counts.len()
    );

    Ok(DocumentFrequencies::new(
        corpus_size,
        counts.into_iter().collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::document::{Document, DocumentId};
    use crate::storage::{FindOptions, Projection, ScoredDocument, TextFilter};

    /// Answers counts from a table; unknown terms fail.
    struct TableStore {
        corpus: u64,
        counts: HashMap<&'static str, u64>,
        calls: AtomicUsize,
    }

    impl TableStore {
        fn new(corpus: u64, counts: &[(&'static str, u64)]) -> Self {
            TableStore {
                corpus,
                counts: counts.iter().copied().collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl DocumentStore for TableStore {
        async fn count(&self, filter: &CountFilter) -> Result<u64> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match filter {
                CountFilter::All => Ok(self.corpus),
                CountFilter::Text(term) => self
                    .counts
                    .get(term.as_str())
                    .copied()
                    .ok_or_else(|| MoreLikeError::store(format!("no count for {term}"))),
            }
        }

        async fn find_by_id(&self, _id: &DocumentId) -> Result<Option<Document>> {
            Ok(None)
        }

        async fn find(
            &self,
            _filter: &TextFilter,
            _projection: &Projection,
            _options: &FindOptions,
        ) -> Result<Vec<ScoredDocument>> {
            Ok(Vec::new())
        }
    }

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_counts_in_seed_order() {
        let store = TableStore::new(4, &[("node", 3), ("document", 4), ("good", 0), ("example", 1)]);
        let seed = terms(&["node", "document", "good", "example", "document", "node"]);

        let df = tokio_test::block_on(count_document_frequencies(&store, &seed)).unwrap();

        assert_eq!(df.corpus_size(), 4);
        assert_eq!(
            df.iter().collect::<Vec<_>>(),
            vec![("node", 3), ("document", 4), ("good", 0), ("example", 1)]
        );
        // one corpus count plus one per unique term
        assert_eq!(store.calls.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_idf_drops_non_discriminative_terms() {
        let store = TableStore::new(4, &[("node", 3), ("document", 4), ("good", 0), ("example", 1)]);
        let seed = terms(&["node", "document", "good", "example"]);
        let df = tokio_test::block_on(count_document_frequencies(&store, &seed)).unwrap();

        let idf = df.idf();
        assert_eq!(idf.len(), 2);
        assert_eq!(idf["example"], 4f64.ln());
        assert_eq!(idf["node"], (4.0f64 / 3.0).ln());
        assert!(df.is_discriminative("node"));
        assert!(!df.is_discriminative("document"));
        assert!(!df.is_discriminative("good"));
        assert!(!df.is_discriminative("missing"));
    }

    #[test]
    fn test_no_terms_still_counts_corpus() {
        let store = TableStore::new(7, &[]);

        let df = tokio_test::block_on(count_document_frequencies(&store, &[])).unwrap();

        assert_eq!(df.corpus_size(), 7);
        assert!(df.is_empty());
        assert_eq!(store.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_first_error_fails_the_join() {
        let store = TableStore::new(4, &[("node", 3)]);
        let seed = terms(&["node", "unknown"]);

        let err = tokio_test::block_on(count_document_frequencies(&store, &seed)).unwrap_err();
        assert_eq!(err.to_string(), "Store error: no count for unknown");
    }

    #[test]
    fn test_empty_corpus_has_no_idf() {
        let df = DocumentFrequencies::new(0, IndexMap::from([("node".to_string(), 0)]));
        assert!(df.idf().is_empty());

        // counts read while the collection was being emptied
        let skewed = DocumentFrequencies::new(
            0,
            IndexMap::from([("node".to_string(), 2), ("good".to_string(), 1)]),
        );
        assert!(skewed.idf().is_empty());
        assert!(!skewed.is_discriminative("node"));
    }
}
