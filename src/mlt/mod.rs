//! More-like-this scoring pipeline.
//!
//! ```text
//! seed → FieldSet → terms → TF (stems) ─┐
//!                    └──→ DF (store counts, concurrent) → TF-IDF → query → store find
//! ```
//!
//! Term frequencies are keyed by stem while document frequencies and TF-IDF
//! weights are keyed by surface term; the scorer stems each surface term to
//! find its frequency.

pub mod config;
pub mod df;
pub mod engine;
pub mod query;
pub mod search;
pub mod terms;
pub mod tf;
pub mod tfidf;

pub use config::{MltConfig, MltOptions};
pub use df::{count_document_frequencies, DocumentFrequencies};
pub use engine::{MoreLikeThis, Seed};
pub use query::make_query;
pub use search::{execute, SimilarityQuery};
pub use terms::{extract_terms, unique_terms};
pub use tf::TermFrequencies;
pub use tfidf::TfIdfScores;
