//! Token filter implementations for token transformation.
//!
//! Filters run in sequence after the tokenizer:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words
//! ```
//!
//! Stemming is not part of the default chain. The scorer keeps surface
//! terms for document counts and applies a [`Stemmer`] itself for term
//! frequencies.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

// Individual filter modules
pub mod lowercase;
pub mod stem;
pub mod stop;

// Re-export all filters for convenient access
pub use lowercase::LowercaseFilter;
pub use stem::{PorterStemmer, StemFilter, Stemmer};
pub use stop::StopFilter;
