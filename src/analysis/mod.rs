//! Text analysis module.
//!
//! Tokenization, normalization and stemming used to turn a seed document's
//! indexed text into terms.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
