//! Storage abstraction layer.
//!
//! The scoring pipeline talks to documents only through the
//! [`DocumentStore`] trait. [`MemoryDocumentStore`] is the bundled
//! implementation.

pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use memory::*;
pub use traits::*;
