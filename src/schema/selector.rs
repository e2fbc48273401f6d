//! Field selection: which fields of a seed feed the scorer.
//!
//! ```
//! use morelike::schema::{FieldSet, FieldType, Schema, TextIndex};
//!
//! let schema = Schema::builder()
//!     .add_field("_id", FieldType::Id)
//!     .add_text_field("name")
//!     .add_field("graduationYear", FieldType::Integer)
//!     .text_index(TextIndex::Wildcard)
//!     .build()
//!     .unwrap();
//!
//! let fields = FieldSet::from_schema(&schema);
//! assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["name", "graduationYear"]);
//! ```

use indexmap::IndexSet;

use crate::document::{ID_FIELD, VERSION_FIELD};
use crate::schema::schema::{Schema, TextIndex};

/// Ordered set of field names covered by a text index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSet {
    fields: IndexSet<String>,
}

impl FieldSet {
    /// Derive the indexed fields from a schema.
    ///
    /// Explicit indexes keep their declaration order and drop names the
    /// schema does not declare. The wildcard covers every declared field
    /// except the identifier and version marker. No index gives an empty set.
    pub fn from_schema(schema: &Schema) -> Self {
        let fields = match schema.text_index() {
            None => IndexSet::new(),
            Some(TextIndex::Fields(names)) => names
                .iter()
                .filter(|name| schema.has_field(name))
                .cloned()
                .collect(),
            Some(TextIndex::Wildcard) => schema
                .fields()
                .filter(|field| {
                    field.name() != ID_FIELD
                        && field.name() != VERSION_FIELD
                        && !field.field_type().is_internal()
                })
                .map(|field| field.name().to_string())
                .collect(),
        };

        FieldSet { fields }
    }

    /// Build a set from explicit names; duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FieldSet {
            fields: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldType;

    #[test]
    fn test_explicit_index_order() {
        let schema = Schema::builder()
            .add_text_field("title")
            .add_text_field("content")
            .text_index(TextIndex::fields(["content", "title", "content"]))
            .build()
            .unwrap();

        let fields = FieldSet::from_schema(&schema);
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["content", "title"]);
        assert!(fields.contains("title"));
    }

    #[test]
    fn test_wildcard_skips_internal_fields() {
        let schema = Schema::builder()
            .add_field("_id", FieldType::Id)
            .add_text_field("name")
            .add_field("__v", FieldType::Integer)
            .add_field("revision", FieldType::Version)
            .add_field("owner", FieldType::Id)
            .add_text_field("university")
            .text_index(TextIndex::Wildcard)
            .build()
            .unwrap();

        let fields = FieldSet::from_schema(&schema);
        assert_eq!(fields.iter().collect::<Vec<_>>(), vec!["name", "university"]);
    }

    #[test]
    fn test_no_index_is_empty() {
        let schema = Schema::builder().add_text_field("content").build().unwrap();

        let fields = FieldSet::from_schema(&schema);
        assert!(fields.is_empty());
        assert_eq!(fields.len(), 0);
    }
}
