//! Schema module.
//!
//! Field declarations, the collection's text index, and the [`FieldSet`]
//! derived from them.

pub mod field;
#[allow(clippy::module_inception)]
pub mod schema;
pub mod selector;

// Re-export commonly used types
pub use field::{FieldDefinition, FieldType};
pub use schema::{Schema, SchemaBuilder, TextIndex};
pub use selector::FieldSet;
