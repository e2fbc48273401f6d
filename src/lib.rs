//! # morelike
//!
//! Content-based "more like this" ranking over a text-searchable document
//! store.
//!
//! Given a seed document, the library weighs the seed's indexed terms by
//! TF-IDF against the corpus held in a [`DocumentStore`](storage::DocumentStore),
//! turns the weights into a boosted text query and lets the store rank the
//! corpus with it.
//!
//! ## Features
//!
//! - Analysis pipeline with a regex tokenizer, stop words and Porter stemming
//! - Concurrent document-frequency counting with fail-fast joins
//! - Pluggable async document stores, with an in-memory reference store
//! - Per-call overrides for result, term and threshold limits
//!
//! ## Example
//!
//! ```
//! use morelike::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let schema = Schema::builder()
//!     .add_text_field("content")
//!     .text_index(TextIndex::fields(["content"]))
//!     .build()?;
//!
//! let store = MemoryDocumentStore::new(&schema);
//! for content in [
//!     "this document is about node. it has node examples.",
//!     "this document is about node.",
//!     "this document is about ruby and node.",
//!     "this document is about ruby.",
//! ] {
//!     store.insert(Document::builder().add_text("content", content).build())?;
//! }
//!
//! let mlt = MoreLikeThis::new(store, &schema);
//! let seed = Document::builder()
//!     .add_text("content", "This node document is a good example document about node")
//!     .build();
//!
//! let similar = mlt
//!     .similar_to(Seed::Document(seed), &Projection::All, &MltOptions::default())
//!     .await?;
//! assert_eq!(similar.len(), 3);
//! # Ok::<(), morelike::error::MoreLikeError>(())
//! # }).unwrap();
//! ```

pub mod analysis;
pub mod document;
pub mod error;
pub mod mlt;
pub mod schema;
pub mod storage;

pub mod prelude {
    pub use crate::document::{Document, DocumentId, FieldValue};
    pub use crate::error::{MoreLikeError, Result};
    pub use crate::mlt::{MltConfig, MltOptions, MoreLikeThis, Seed};
    pub use crate::schema::{FieldSet, FieldType, Schema, TextIndex};
    pub use crate::storage::{
        DocumentStore, FindOptions, MemoryDocumentStore, Projection, ScoredDocument,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
