//! In-memory document store for tests and small collections.
//!
//! Text search behaves like a MongoDB `$text` index: the indexed fields are
//! analyzed and stemmed, a search matches a document when any of its stems
//! occurs there, and the relevance of a match is the sum over the query's
//! stems (repetitions included) of how often each occurs in the document,
//! divided by the document's indexed token count.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::token_filter::{PorterStemmer, Stemmer};
use crate::document::{Document, DocumentId};
use crate::error::{MoreLikeError, Result};
use crate::schema::{FieldSet, Schema};
use crate::storage::traits::{
    CountFilter, DocumentStore, FindOptions, Projection, ScoredDocument, SortOrder, TextFilter,
};

/// A stored document with its text index entry.
#[derive(Debug, Clone)]
struct IndexedDocument {
    id: DocumentId,
    document: Document,
    /// Stem → occurrences in the indexed fields.
    stems: HashMap<String, u32>,
    /// Number of indexed tokens, after stop-word removal.
    token_count: usize,
}

impl IndexedDocument {
    fn relevance(&self, query: &[String]) -> f64 {
        if self.token_count == 0 {
            return 0.0;
        }
        let hits: u32 = query
            .iter()
            .map(|stem| self.stems.get(stem).copied().unwrap_or(0))
            .sum();
        hits as f64 / self.token_count as f64
    }

    fn matches_any(&self, query: &[String]) -> bool {
        query.iter().any(|stem| self.stems.contains_key(stem))
    }
}

/// An in-memory [`DocumentStore`].
///
/// Documents are kept in insertion order behind a read-write lock; reads
/// never block each other.
pub struct MemoryDocumentStore {
    documents: RwLock<Vec<IndexedDocument>>,
    fields: FieldSet,
    analyzer: Arc<dyn Analyzer>,
    stemmer: Arc<dyn Stemmer>,
}

impl std::fmt::Debug for MemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryDocumentStore")
            .field("documents", &self.documents.read().len())
            .field("fields", &self.fields)
            .field("analyzer", &self.analyzer.name())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl MemoryDocumentStore {
    /// Create an empty store indexing the schema's text index with the
    /// English analyzer and Porter stemming.
    pub fn new(schema: &Schema) -> Self {
        Self::with_analysis(
            schema,
            Arc::new(EnglishAnalyzer::default()),
            Arc::new(PorterStemmer::new()),
        )
    }

    /// Create an empty store with custom analysis.
    pub fn with_analysis(
        schema: &Schema,
        analyzer: Arc<dyn Analyzer>,
        stemmer: Arc<dyn Stemmer>,
    ) -> Self {
        MemoryDocumentStore {
            documents: RwLock::new(Vec::new()),
            fields: FieldSet::from_schema(schema),
            analyzer,
            stemmer,
        }
    }

    /// Insert a document, assigning an `_id` when it has none.
    pub fn insert(&self, mut document: Document) -> Result<DocumentId> {
        let id = match document.id() {
            Some(id) => id,
            None => {
                let id = DocumentId::generate();
                document.set_id(id);
                id
            }
        };

        let terms = self.analyzer.terms(&document.text_of(&self.fields))?;
        let mut stems = HashMap::new();
        for term in &terms {
            *stems.entry(self.stemmer.stem(term)).or_insert(0) += 1;
        }

        let mut documents = self.documents.write();
        if documents.iter().any(|d| d.id == id) {
            return Err(MoreLikeError::store(format!("duplicate key _id: {id}")));
        }
        documents.push(IndexedDocument {
            id,
            document,
            stems,
            token_count: terms.len(),
        });

        Ok(id)
    }

    /// Insert several documents, stopping at the first failure.
    pub fn insert_many<I>(&self, documents: I) -> Result<Vec<DocumentId>>
    where
        I: IntoIterator<Item = Document>,
    {
        documents.into_iter().map(|doc| self.insert(doc)).collect()
    }

    /// Remove a document by id.
    pub fn remove(&self, id: &DocumentId) -> Option<Document> {
        let mut documents = self.documents.write();
        let position = documents.iter().position(|d| &d.id == id)?;
        Some(documents.remove(position).document)
    }

    /// Remove every document.
    pub fn clear(&self) {
        self.documents.write().clear();
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }

    /// The fields covered by the text index.
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Analyze and stem a search string, keeping repetitions.
    fn query_stems(&self, search: &str) -> Result<Vec<String>> {
        Ok(self
            .analyzer
            .terms(search)?
            .iter()
            .map(|term| self.stemmer.stem(term))
            .collect())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn count(&self, filter: &CountFilter) -> Result<u64> {
        match filter {
            CountFilter::All => Ok(self.documents.read().len() as u64),
            CountFilter::Text(search) => {
                let query = self.query_stems(search)?;
                let documents = self.documents.read();
                Ok(documents.iter().filter(|d| d.matches_any(&query)).count() as u64)
            }
        }
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>> {
        let documents = self.documents.read();
        Ok(documents
            .iter()
            .find(|d| &d.id == id)
            .map(|d| d.document.clone()))
    }

    async fn find(
        &self,
        filter: &TextFilter,
        projection: &Projection,
        options: &FindOptions,
    ) -> Result<Vec<ScoredDocument>> {
        let query = self.query_stems(&filter.search)?;

        let mut scored: Vec<(f64, Document)> = {
            let documents = self.documents.read();
            documents
                .iter()
                .filter(|d| Some(d.id) != filter.exclude_id)
                .map(|d| (d.relevance(&query), d))
                .filter(|(score, _)| *score > 0.0)
                .map(|(score, d)| (score, d.document.clone()))
                .collect()
        };

        match options.sort {
            // stable, so ties keep insertion order
            SortOrder::Relevance => scored.sort_by(|a, b| b.0.total_cmp(&a.0)),
        }

        let limit = options.limit.unwrap_or(usize::MAX);
        Ok(scored
            .into_iter()
            .skip(options.skip)
            .take(limit)
            .map(|(score, document)| ScoredDocument {
                document: projection.apply(document),
                score,
            })
            .collect())
    }
}
