//! The more-like-this entry point.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde_json::Value;

use crate::analysis::analyzer::{Analyzer, EnglishAnalyzer};
use crate::analysis::token_filter::{PorterStemmer, Stemmer};
use crate::document::{Document, DocumentId};
use crate::error::{MoreLikeError, Result};
use crate::mlt::config::{MltConfig, MltOptions};
use crate::mlt::df::{count_document_frequencies, DocumentFrequencies};
use crate::mlt::query::make_query;
use crate::mlt::search::{execute, SimilarityQuery};
use crate::mlt::terms::extract_terms;
use crate::mlt::tf::TermFrequencies;
use crate::mlt::tfidf::TfIdfScores;
use crate::schema::{FieldSet, Schema};
use crate::storage::{DocumentStore, FindOptions, Projection, ScoredDocument, SortOrder};

/// What to find similar documents to.
#[derive(Debug, Clone, PartialEq)]
pub enum Seed {
    /// A stored document, by id. Malformed ids are rejected; unknown ids
    /// give no results.
    Id(String),
    /// An inline document. Its `_id`, if any, is left out of the results.
    Document(Document),
}

impl Seed {
    /// Interpret a JSON value: a string is an id, an object is a document.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(id) => Ok(Seed::Id(id.clone())),
            Value::Object(_) => Ok(Seed::Document(Document::from_json(value)?)),
            other => Err(MoreLikeError::invalid_input(format!(
                "seed must be a document id or an object, got {other}"
            ))),
        }
    }
}

impl From<DocumentId> for Seed {
    fn from(id: DocumentId) -> Self {
        Seed::Id(id.to_hex())
    }
}

impl From<Document> for Seed {
    fn from(document: Document) -> Self {
        Seed::Document(document)
    }
}

/// Finds documents similar to a seed in a [`DocumentStore`].
///
/// The indexed fields are taken from the schema once, at construction. A
/// `MoreLikeThis` holds no per-request state and can serve concurrent
/// requests through a shared reference.
pub struct MoreLikeThis<S> {
    store: S,
    fields: FieldSet,
    config: MltConfig,
    analyzer: Arc<dyn Analyzer>,
    stemmer: Arc<dyn Stemmer>,
}

impl<S> std::fmt::Debug for MoreLikeThis<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MoreLikeThis")
            .field("fields", &self.fields)
            .field("config", &self.config)
            .field("analyzer", &self.analyzer.name())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}

impl<S: DocumentStore> MoreLikeThis<S> {
    /// Create an instance over `store` using the text index of `schema`.
    pub fn new(store: S, schema: &Schema) -> Self {
        MoreLikeThis {
            store,
            fields: FieldSet::from_schema(schema),
            config: MltConfig::default(),
            analyzer: Arc::new(EnglishAnalyzer::default()),
            stemmer: Arc::new(PorterStemmer::new()),
        }
    }

    /// Replace the default limits.
    pub fn with_config(mut self, config: MltConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Analyze seeds with a custom analyzer.
    pub fn with_analyzer(mut self, analyzer: Arc<dyn Analyzer>) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Stem seed terms with a custom stemmer.
    pub fn with_stemmer(mut self, stemmer: Arc<dyn Stemmer>) -> Self {
        self.stemmer = stemmer;
        self
    }

    /// Re-read the indexed fields after the schema changed.
    pub fn reconfigure(&mut self, schema: &Schema) {
        self.fields = FieldSet::from_schema(schema);
        debug!("reconfigured with {} indexed fields", self.fields.len());
    }

    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    pub fn config(&self) -> &MltConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Surface terms of the seed's indexed text.
    pub fn terms(&self, document: &Document) -> Result<Vec<String>> {
        extract_terms(document, &self.fields, self.analyzer.as_ref())
    }

    /// Stem frequencies of the seed, filtered by `threshold`.
    pub fn term_frequencies(&self, document: &Document, threshold: u32) -> Result<TermFrequencies> {
        let terms = self.terms(document)?;
        Ok(TermFrequencies::from_terms(
            &terms,
            self.stemmer.as_ref(),
            threshold,
        ))
    }

    /// Corpus size and per-term document counts for the seed's terms.
    pub async fn document_frequencies(&self, document: &Document) -> Result<DocumentFrequencies> {
        let terms = self.terms(document)?;
        count_document_frequencies(&self.store, &terms).await
    }

    /// TF-IDF weights of the seed's terms.
    pub async fn tf_idf(&self, document: &Document, options: &MltOptions) -> Result<TfIdfScores> {
        let config = self.resolve(options)?;
        let terms = self.terms(document)?;
        self.score(&terms, &config, options.timeout).await
    }

    /// Build the boosted query for a set of weights.
    pub fn make_query(&self, scores: &TfIdfScores) -> Result<String> {
        make_query(scores)
    }

    /// Documents similar to the seed, most similar first.
    ///
    /// ```
    /// use morelike::prelude::*;
    ///
    /// # tokio_test::block_on(async {
    /// let schema = Schema::builder()
    ///     .add_text_field("content")
    ///     .text_index(TextIndex::fields(["content"]))
    ///     .build()?;
    /// let store = MemoryDocumentStore::new(&schema);
    /// store.insert(Document::builder().add_text("content", "rust borrow checker").build())?;
    /// store.insert(Document::builder().add_text("content", "rust macros").build())?;
    /// store.insert(Document::builder().add_text("content", "python decorators").build())?;
    ///
    /// let mlt = MoreLikeThis::new(store, &schema);
    /// let unknown = Seed::Id("123456789012345678901234".to_string());
    /// assert!(mlt.similar_to(unknown, &Projection::All, &MltOptions::default()).await?.is_empty());
    ///
    /// let malformed = Seed::Id("123456".to_string());
    /// assert!(mlt.similar_to(malformed, &Projection::All, &MltOptions::default()).await.is_err());
    /// # Ok::<(), MoreLikeError>(())
    /// # }).unwrap();
    /// ```
    pub async fn similar_to(
        &self,
        seed: Seed,
        projection: &Projection,
        options: &MltOptions,
    ) -> Result<Vec<ScoredDocument>> {
        let config = self.resolve(options)?;

        let (document, exclude_id) = match seed {
            Seed::Id(raw) => {
                let id = DocumentId::parse(&raw)?;
                let found =
                    with_deadline(options.timeout, "seed lookup", self.store.find_by_id(&id)).await?;
                match found {
                    Some(document) => (document, Some(id)),
                    None => {
                        debug!("seed {id} not found");
                        return Ok(Vec::new());
                    }
                }
            }
            Seed::Document(document) => {
                let id = document.id();
                (document, id)
            }
        };

        let terms = self.terms(&document)?;
        debug!("seed has {} terms", terms.len());

        let Some(scores) = self.score_nonempty(&terms, &config, options.timeout).await? else {
            return Ok(Vec::new());
        };

        let query = SimilarityQuery::new(make_query(&scores)?, exclude_id);
        debug!("query: {}", query.search);

        let find_options = FindOptions {
            limit: Some(config.result_limit),
            skip: options.skip,
            sort: SortOrder::Relevance,
        };
        with_deadline(
            options.timeout,
            "similarity search",
            execute(&self.store, &query, projection, &find_options),
        )
        .await
    }

    fn resolve(&self, options: &MltOptions) -> Result<MltConfig> {
        let config = self.config.resolve(options);
        config.validate()?;
        Ok(config)
    }

    async fn score(
        &self,
        terms: &[String],
        config: &MltConfig,
        timeout: Option<Duration>,
    ) -> Result<TfIdfScores> {
        Ok(self
            .score_nonempty(terms, config, timeout)
            .await?
            .unwrap_or_default())
    }

    /// `None` when the collection is empty.
    async fn score_nonempty(
        &self,
        terms: &[String],
        config: &MltConfig,
        timeout: Option<Duration>,
    ) -> Result<Option<TfIdfScores>> {
        let tf = TermFrequencies::from_terms(
            terms,
            self.stemmer.as_ref(),
            config.term_frequency_threshold,
        );
        debug!("{} stems after threshold {}", tf.len(), config.term_frequency_threshold);

        let df = with_deadline(
            timeout,
            "document frequency counting",
            count_document_frequencies(&self.store, terms),
        )
        .await?;
        if df.corpus_size() == 0 {
            debug!("empty corpus");
            return Ok(None);
        }

        let scores = TfIdfScores::compute(&tf, &df, self.stemmer.as_ref(), config.term_count_limit);
        debug!("{} of {} terms kept", scores.len(), df.len());
        Ok(Some(scores))
    }
}

async fn with_deadline<T, F>(timeout: Option<Duration>, stage: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match timeout {
        Some(limit) => tokio::time::timeout(limit, future)
            .await
            .map_err(|_| MoreLikeError::timeout(format!("{stage} exceeded {limit:?}")))?,
        None => future.await,
    }
}
