//! Execution of a boosted query against the store.

use log::debug;

use crate::document::DocumentId;
use crate::error::Result;
use crate::storage::{DocumentStore, FindOptions, Projection, ScoredDocument, SortOrder, TextFilter};

/// A boosted query and the seed it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarityQuery {
    /// Query string in the store's text-search syntax.
    pub search: String,
    /// The seed's id, left out of the results.
    pub exclude_id: Option<DocumentId>,
}

impl SimilarityQuery {
    pub fn new<S: Into<String>>(search: S, exclude_id: Option<DocumentId>) -> Self {
        SimilarityQuery {
            search: search.into(),
            exclude_id,
        }
    }
}

/// Rank the store's documents by relevance to the query. Store errors are
/// returned unchanged.
pub async fn execute<S>(
    store: &S,
    query: &SimilarityQuery,
    projection: &Projection,
    options: &FindOptions,
) -> Result<Vec<ScoredDocument>>
where
    S: DocumentStore + ?Sized,
{
    let filter = TextFilter::new(query.search.clone()).excluding(query.exclude_id);
    let options = FindOptions {
        sort: SortOrder::Relevance,
        ..options.clone()
    };

    let results = store.find(&filter, projection, &options).await?;
    debug!("'{}' matched {} documents", query.search, results.len());
    Ok(results)
}
