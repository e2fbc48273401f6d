//! Error types for the morelike library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`MoreLikeError`] enum. Store implementations build their failures with
//! [`MoreLikeError::store`] and the pipeline hands them back to the caller
//! untouched.
//!
//! # Examples
//!
//! ```
//! use morelike::error::{MoreLikeError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(MoreLikeError::invalid_input("not a document id"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

/// The main error type for morelike operations.
#[derive(Error, Debug)]
pub enum MoreLikeError {
    /// The seed or a request argument is malformed (bad id, non-object seed,
    /// invalid projection).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Every candidate term was filtered out, so no boosted query can be built.
    #[error("Empty score: no discriminative terms left to build a query from")]
    EmptyScore,

    /// A document store operation failed.
    #[error("Store error: {0}")]
    Store(String),

    /// A caller-supplied deadline elapsed.
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Schema-related errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Invalid configuration values
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with MoreLikeError.
pub type Result<T> = std::result::Result<T, MoreLikeError>;

impl MoreLikeError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        MoreLikeError::InvalidInput(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        MoreLikeError::Store(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        MoreLikeError::Timeout(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        MoreLikeError::Schema(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        MoreLikeError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        MoreLikeError::Config(msg.into())
    }
}
