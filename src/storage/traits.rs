//! Document store abstraction and the request types it accepts.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::document::{Document, DocumentId, ID_FIELD};
use crate::error::{MoreLikeError, Result};

/// What a count request matches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountFilter {
    /// Every document in the collection.
    All,
    /// Documents the store's text search matches for this term.
    Text(String),
}

/// A text search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFilter {
    /// Query string in the store's text-search syntax (space separated terms,
    /// repetitions boost).
    pub search: String,
    /// Document to leave out of the results.
    pub exclude_id: Option<DocumentId>,
}

impl TextFilter {
    pub fn new<S: Into<String>>(search: S) -> Self {
        TextFilter {
            search: search.into(),
            exclude_id: None,
        }
    }

    pub fn excluding(mut self, id: Option<DocumentId>) -> Self {
        self.exclude_id = id;
        self
    }
}

/// Which fields of a matching document to return.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Projection {
    /// The whole document.
    #[default]
    All,
    /// Only these fields, plus `_id`.
    Include(Vec<String>),
    /// Everything but these fields.
    Exclude(Vec<String>),
}

impl Projection {
    /// Parse the space separated form, e.g. `"name university"` or
    /// `"-content -__v"`. A blank string selects everything.
    ///
    /// ```
    /// use morelike::storage::Projection;
    ///
    /// assert_eq!(
    ///     Projection::parse("-content").unwrap(),
    ///     Projection::Exclude(vec!["content".to_string()])
    /// );
    /// assert!(Projection::parse("name -content").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        let mut include = Vec::new();
        let mut exclude = Vec::new();

        for field in input.split_whitespace() {
            match field.strip_prefix('-') {
                Some("") => {
                    return Err(MoreLikeError::invalid_input(
                        "projection contains an empty field name",
                    ));
                }
                Some(name) => exclude.push(name.to_string()),
                None => include.push(field.to_string()),
            }
        }

        match (include.is_empty(), exclude.is_empty()) {
            (true, true) => Ok(Projection::All),
            (false, true) => Ok(Projection::Include(include)),
            (true, false) => Ok(Projection::Exclude(exclude)),
            (false, false) => Err(MoreLikeError::invalid_input(format!(
                "projection '{input}' mixes included and excluded fields"
            ))),
        }
    }

    /// Apply the projection to a document.
    pub fn apply(&self, mut document: Document) -> Document {
        match self {
            Projection::All => document,
            Projection::Include(fields) => {
                let mut projected = Document::new();
                for (name, value) in document.fields() {
                    if name == ID_FIELD || fields.iter().any(|f| f == name) {
                        projected.add_field(name.clone(), value.clone());
                    }
                }
                projected
            }
            Projection::Exclude(fields) => {
                for name in fields {
                    document.remove_field(name);
                }
                document
            }
        }
    }
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    /// Highest text relevance first.
    #[default]
    Relevance,
}

/// Paging and ordering of a find request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FindOptions {
    /// Maximum number of results. `None` returns everything.
    pub limit: Option<usize>,
    /// Number of leading results to skip.
    pub skip: usize,
    pub sort: SortOrder,
}

impl FindOptions {
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_skip(mut self, skip: usize) -> Self {
        self.skip = skip;
        self
    }
}

/// A matching document and the store's relevance score for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub document: Document,
    pub score: f64,
}

/// A collection of documents with a text-search capability.
///
/// Implementations report their own failures as
/// [`MoreLikeError::Store`]; callers pass them through unchanged. All
/// methods are read-only and may be called concurrently.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Count the documents matching the filter.
    async fn count(&self, filter: &CountFilter) -> Result<u64>;

    /// Fetch a document by id.
    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>>;

    /// Run a text search, ordered as `options.sort` asks.
    async fn find(
        &self,
        filter: &TextFilter,
        projection: &Projection,
        options: &FindOptions,
    ) -> Result<Vec<ScoredDocument>>;
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn count(&self, filter: &CountFilter) -> Result<u64> {
        (**self).count(filter).await
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>> {
        (**self).find_by_id(id).await
    }

    async fn find(
        &self,
        filter: &TextFilter,
        projection: &Projection,
        options: &FindOptions,
    ) -> Result<Vec<ScoredDocument>> {
        (**self).find(filter, projection, options).await
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Box<S> {
    async fn count(&self, filter: &CountFilter) -> Result<u64> {
        (**self).count(filter).await
    }

    async fn find_by_id(&self, id: &DocumentId) -> Result<Option<Document>> {
        (**self).find_by_id(id).await
    }

    async fn find(
        &self,
        filter: &TextFilter,
        projection: &Projection,
        options: &FindOptions,
    ) -> Result<Vec<ScoredDocument>> {
        (**self).find(filter, projection, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_projection() {
        assert_eq!(Projection::parse("").unwrap(), Projection::All);
        assert_eq!(Projection::parse("   ").unwrap(), Projection::All);
        assert_eq!(
            Projection::parse("name  university").unwrap(),
            Projection::Include(vec!["name".to_string(), "university".to_string()])
        );
        assert_eq!(
            Projection::parse("-content -__v").unwrap(),
            Projection::Exclude(vec!["content".to_string(), "__v".to_string()])
        );

        assert!(matches!(
            Projection::parse("name -content"),
            Err(MoreLikeError::InvalidInput(_))
        ));
        assert!(matches!(Projection::parse("-"), Err(MoreLikeError::InvalidInput(_))));
    }

    #[test]
    fn test_apply_projection() {
        let id = DocumentId::generate();
        let doc = Document::builder()
            .add_id(id)
            .add_text("name", "Alice Smith")
            .add_text("university", "University of Michigan")
            .add_integer("graduationYear", 2006)
            .build();

        let included = Projection::Include(vec!["university".to_string()]).apply(doc.clone());
        assert_eq!(included.field_names(), vec!["_id", "university"]);

        let excluded = Projection::Exclude(vec!["name".to_string(), "missing".to_string()])
            .apply(doc.clone());
        assert_eq!(excluded.field_names(), vec!["_id", "university", "graduationYear"]);

        assert_eq!(Projection::All.apply(doc.clone()), doc);
    }

    #[test]
    fn test_find_options() {
        let options = FindOptions::default().with_limit(10).with_skip(2);
        assert_eq!(options.limit, Some(10));
        assert_eq!(options.skip, 2);
        assert_eq!(options.sort, SortOrder::Relevance);

        let filter = TextFilter::new("node example").excluding(None);
        assert_eq!(filter.search, "node example");
        assert!(filter.exclude_id.is_none());
    }
}
