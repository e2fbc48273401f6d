//! Document module.
//!
//! Ordered documents as they are read from and returned by a
//! [`DocumentStore`](crate::storage::DocumentStore).

#[allow(clippy::module_inception)]
pub mod document;
pub mod field_value;
pub mod id;

/// Name of the identifier field.
pub const ID_FIELD: &str = "_id";

/// Name of the version marker some stores add to every record.
pub const VERSION_FIELD: &str = "__v";

// Re-export commonly used types
pub use document::{Document, DocumentBuilder};
pub use field_value::FieldValue;
pub use id::DocumentId;
