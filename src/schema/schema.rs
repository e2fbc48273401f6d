//! Schema management for document structure definition.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{MoreLikeError, Result};
use crate::schema::field::{FieldDefinition, FieldType};

/// Which fields a store's text index covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextIndex {
    /// An explicit list of fields, in declaration order.
    Fields(Vec<String>),
    /// Every content field of the schema.
    Wildcard,
}

impl TextIndex {
    /// Index over the given fields.
    pub fn fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TextIndex::Fields(fields.into_iter().map(Into::into).collect())
    }
}

/// A schema describes the fields of the documents in a collection and the
/// optional text index over them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Field definitions in the order they were added
    fields: IndexMap<String, FieldDefinition>,
    /// Text index declared on the collection, if any
    text_index: Option<TextIndex>,
}

impl Schema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Schema {
            fields: IndexMap::new(),
            text_index: None,
        }
    }

    /// Add a field to the schema.
    pub fn add_field<S: Into<String>>(&mut self, name: S, field_type: FieldType) -> Result<()> {
        let name = name.into();

        if name.is_empty() {
            return Err(MoreLikeError::schema("Field name cannot be empty"));
        }

        if self.fields.contains_key(&name) {
            return Err(MoreLikeError::schema(format!(
                "Field '{name}' already exists"
            )));
        }

        let field_def = FieldDefinition::new(name.clone(), field_type);
        self.fields.insert(name, field_def);

        Ok(())
    }

    /// Get a field definition by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Check if a field exists.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove a field from the schema. Fails while the text index still
    /// names it.
    pub fn remove_field(&mut self, name: &str) -> Result<()> {
        if !self.fields.contains_key(name) {
            return Err(MoreLikeError::schema(format!(
                "Field '{name}' does not exist"
            )));
        }

        if let Some(TextIndex::Fields(indexed)) = &self.text_index {
            if indexed.iter().any(|f| f == name) {
                return Err(MoreLikeError::schema(format!(
                    "Field '{name}' is part of the text index"
                )));
            }
        }

        self.fields.shift_remove(name);
        Ok(())
    }

    /// Get all field names in the order they were added.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get all field definitions.
    pub fn fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.values()
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the schema is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The declared text index.
    pub fn text_index(&self) -> Option<&TextIndex> {
        self.text_index.as_ref()
    }

    /// Declare the text index. Every explicitly listed field must exist.
    pub fn set_text_index(&mut self, index: TextIndex) -> Result<()> {
        if let TextIndex::Fields(fields) = &index {
            for name in fields {
                if !self.fields.contains_key(name) {
                    return Err(MoreLikeError::schema(format!(
                        "Text index refers to undeclared field '{name}'"
                    )));
                }
            }
        }

        self.text_index = Some(index);
        Ok(())
    }

    /// Drop the text index.
    pub fn clear_text_index(&mut self) {
        self.text_index = None;
    }

    /// Create a builder for constructing schemas.
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::new()
    }
}

/// A builder for constructing schemas in a fluent manner.
///
/// Problems are reported by [`SchemaBuilder::build`], so the chain itself
/// never has to be interrupted.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<(String, FieldType)>,
    text_index: Option<TextIndex>,
}

impl SchemaBuilder {
    /// Create a new schema builder.
    pub fn new() -> Self {
        SchemaBuilder::default()
    }

    /// Add a field to the schema being built.
    pub fn add_field<S: Into<String>>(mut self, name: S, field_type: FieldType) -> Self {
        self.fields.push((name.into(), field_type));
        self
    }

    /// Add a text field.
    pub fn add_text_field<S: Into<String>>(self, name: S) -> Self {
        self.add_field(name, FieldType::Text)
    }

    /// Declare the text index.
    pub fn text_index(mut self, index: TextIndex) -> Self {
        self.text_index = Some(index);
        self
    }

    /// Build the final schema.
    pub fn build(self) -> Result<Schema> {
        let mut schema = Schema::new();
        for (name, field_type) in self.fields {
            schema.add_field(name, field_type)?;
        }
        if let Some(index) = self.text_index {
            schema.set_text_index(index)?;
        }
        Ok(schema)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let schema = Schema::builder()
            .add_field("_id", FieldType::Id)
            .add_text_field("title")
            .add_field("year", FieldType::Integer)
            .text_index(TextIndex::fields(["title"]))
            .build()
            .unwrap();

        assert_eq!(schema.field_names(), vec!["_id", "title", "year"]);
        assert_eq!(schema.len(), 3);
        assert_eq!(schema.get_field("year").unwrap().field_type(), FieldType::Integer);
        assert_eq!(
            schema.text_index(),
            Some(&TextIndex::Fields(vec!["title".to_string()]))
        );
    }

    #[test]
    fn test_duplicate_and_empty_names() {
        let err = Schema::builder()
            .add_text_field("title")
            .add_text_field("title")
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "Schema error: Field 'title' already exists");

        let err = Schema::builder().add_text_field("").build().unwrap_err();
        assert!(matches!(err, MoreLikeError::Schema(_)));
    }

    #[test]
    fn test_index_over_undeclared_field() {
        let err = Schema::builder()
            .add_text_field("title")
            .text_index(TextIndex::fields(["body"]))
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("undeclared field 'body'"));

        // wildcard needs no declared fields
        let schema = Schema::builder().text_index(TextIndex::Wildcard).build().unwrap();
        assert!(schema.is_empty());
    }

    #[test]
    fn test_remove_field() {
        let mut schema = Schema::builder()
            .add_text_field("title")
            .add_text_field("notes")
            .text_index(TextIndex::fields(["title"]))
            .build()
            .unwrap();

        assert!(schema.remove_field("title").is_err());
        assert!(schema.remove_field("missing").is_err());
        schema.remove_field("notes").unwrap();
        assert!(!schema.has_field("notes"));

        schema.clear_text_index();
        schema.remove_field("title").unwrap();
        assert!(schema.is_empty());
    }
}
