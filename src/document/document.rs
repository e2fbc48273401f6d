//! Document structure.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::document::field_value::FieldValue;
use crate::document::id::DocumentId;
use crate::document::ID_FIELD;
use crate::error::{MoreLikeError, Result};
use crate::schema::FieldSet;

/// A document is an ordered collection of named field values.
///
/// Field order is the insertion order and is kept through JSON conversion,
/// so the text handed to the analyzer is reproducible.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Default)]
pub struct Document {
    /// The field values for this document
    fields: IndexMap<String, FieldValue>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Document {
            fields: IndexMap::new(),
        }
    }

    /// Add a field value to the document. Re-adding a name replaces the
    /// value in place.
    pub fn add_field<S: Into<String>>(&mut self, name: S, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Get a field value from the document.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Check if the document has a field.
    pub fn has_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Remove a field from the document.
    pub fn remove_field(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.shift_remove(name)
    }

    /// Get all field names.
    pub fn field_names(&self) -> Vec<&str> {
        self.fields.keys().map(|s| s.as_str()).collect()
    }

    /// Get all field values.
    pub fn fields(&self) -> &IndexMap<String, FieldValue> {
        &self.fields
    }

    /// Get the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The document's `_id`, if it carries one as an id value.
    pub fn id(&self) -> Option<DocumentId> {
        self.fields.get(ID_FIELD).and_then(|v| v.as_id()).copied()
    }

    /// Set the `_id` field. A new id goes first so it prints like a stored
    /// record.
    pub fn set_id(&mut self, id: DocumentId) {
        match self.fields.get_mut(ID_FIELD) {
            Some(value) => *value = FieldValue::Id(id),
            None => {
                self.fields.shift_insert(0, ID_FIELD.to_string(), FieldValue::Id(id));
            }
        }
    }

    /// The indexed text: the listed fields present here, in set order,
    /// flattened and joined with single spaces.
    pub fn text_of(&self, fields: &FieldSet) -> String {
        fields
            .iter()
            .filter_map(|name| self.fields.get(name))
            .map(FieldValue::to_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Create a builder for constructing documents.
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// Build a document from a JSON object.
    ///
    /// A top-level `_id` string that parses as an id becomes
    /// [`FieldValue::Id`]; any other `_id` is kept as plain data.
    pub fn from_json(value: &Value) -> Result<Self> {
        let map = value
            .as_object()
            .ok_or_else(|| MoreLikeError::invalid_input("document must be a JSON object"))?;

        let mut document = Document::new();
        for (name, value) in map {
            let field_value = match value {
                Value::String(s) if name == ID_FIELD => match DocumentId::parse(s) {
                    Ok(id) => FieldValue::Id(id),
                    Err(_) => FieldValue::Text(s.clone()),
                },
                other => FieldValue::from_json(other),
            };
            document.add_field(name.clone(), field_value);
        }

        Ok(document)
    }

    /// Parse a document from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(input)?;
        Self::from_json(&value)
    }

    /// Convert to a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.fields
                .iter()
                .map(|(k, v)| (k.clone(), v.to_json()))
                .collect::<Map<String, Value>>(),
        )
    }
}

/// A builder for constructing documents in a fluent manner.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Create a new document builder.
    pub fn new() -> Self {
        DocumentBuilder {
            document: Document::new(),
        }
    }

    /// Add a text field to the document.
    pub fn add_text<S: Into<String>, T: Into<String>>(mut self, name: S, value: T) -> Self {
        self.document
            .add_field(name, FieldValue::Text(value.into()));
        self
    }

    /// Add an integer field to the document.
    pub fn add_integer<S: Into<String>>(mut self, name: S, value: i64) -> Self {
        self.document.add_field(name, FieldValue::Integer(value));
        self
    }

    /// Add a float field to the document.
    pub fn add_float<S: Into<String>>(mut self, name: S, value: f64) -> Self {
        self.document.add_field(name, FieldValue::Float(value));
        self
    }

    /// Add a boolean field to the document.
    pub fn add_boolean<S: Into<String>>(mut self, name: S, value: bool) -> Self {
        self.document.add_field(name, FieldValue::Boolean(value));
        self
    }

    /// Add a datetime field to the document.
    pub fn add_datetime<S: Into<String>>(
        mut self,
        name: S,
        value: chrono::DateTime<chrono::Utc>,
    ) -> Self {
        self.document.add_field(name, FieldValue::DateTime(value));
        self
    }

    /// Set the document's `_id`.
    pub fn add_id(mut self, id: DocumentId) -> Self {
        self.document.set_id(id);
        self
    }

    /// Add a field with a generic value.
    pub fn add_field<S: Into<String>>(mut self, name: S, value: FieldValue) -> Self {
        self.document.add_field(name, value);
        self
    }

    /// Build the final document.
    pub fn build(self) -> Document {
        self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Schema, TextIndex};
    use serde_json::json;

    #[test]
    fn test_builder_keeps_order() {
        let doc = Document::builder()
            .add_text("name", "Victor Kareh")
            .add_integer("graduationYear", 2005)
            .add_text("degree", "BSE")
            .build();

        assert_eq!(doc.field_names(), vec!["name", "graduationYear", "degree"]);
        assert_eq!(doc.len(), 3);
        assert!(doc.id().is_none());
    }

    #[test]
    fn test_set_id_goes_first() {
        let id = DocumentId::generate();
        let mut doc = Document::builder().add_text("content", "node").add_id(id).build();

        assert_eq!(doc.field_names(), vec!["_id", "content"]);
        assert_eq!(doc.id(), Some(id));

        let other = DocumentId::generate();
        doc.set_id(other);
        assert_eq!(doc.id(), Some(other));
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_remove_field_keeps_order() {
        let mut doc = Document::builder()
            .add_text("a", "1")
            .add_text("b", "2")
            .add_text("c", "3")
            .build();

        assert_eq!(doc.remove_field("a"), Some(FieldValue::from("1")));
        assert_eq!(doc.field_names(), vec!["b", "c"]);
        assert!(!doc.has_field("a"));
    }

    #[test]
    fn test_from_json() {
        let doc = Document::from_json(&json!({
            "_id": "123456789012345678901234",
            "name": "Victor Kareh",
            "graduationYear": 2005
        }))
        .unwrap();

        assert_eq!(
            doc.id().map(|id| id.to_string()),
            Some("123456789012345678901234".to_string())
        );
        assert_eq!(doc.get_field("graduationYear"), Some(&FieldValue::Integer(2005)));
        assert_eq!(doc.to_json()["_id"], json!("123456789012345678901234"));

        let doc = Document::from_json(&json!({"_id": "custom"})).unwrap();
        assert!(doc.id().is_none());
        assert_eq!(doc.get_field("_id"), Some(&FieldValue::from("custom")));

        assert!(matches!(
            Document::from_json(&json!([1, 2])),
            Err(MoreLikeError::InvalidInput(_))
        ));
        assert!(matches!(Document::from_json_str("{"), Err(MoreLikeError::Json(_))));
    }

    #[test]
    fn test_text_of_follows_field_set() {
        let schema = Schema::builder()
            .add_text_field("title")
            .add_text_field("body")
            .add_text_field("notes")
            .text_index(TextIndex::fields(["body", "title", "notes"]))
            .build()
            .unwrap();
        let fields = FieldSet::from_schema(&schema);

        let doc = Document::builder()
            .add_text("title", "Node")
            .add_text("body", "Examples")
            .add_field("notes", FieldValue::Null)
            .add_text("ignored", "never")
            .build();

        assert_eq!(doc.text_of(&fields), "Examples Node");
    }
}
