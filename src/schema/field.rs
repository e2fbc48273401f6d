//! Field definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldType {
    /// Free text, eligible for the text index.
    Text,
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Float,
    /// Boolean.
    Boolean,
    /// UTC timestamp.
    DateTime,
    /// Document identifier. Never part of a wildcard text index.
    Id,
    /// Store-maintained revision marker. Never part of a wildcard text index.
    Version,
}

impl FieldType {
    /// Whether the type is internal bookkeeping rather than content.
    pub fn is_internal(&self) -> bool {
        matches!(self, FieldType::Id | FieldType::Version)
    }

    /// Get the type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::DateTime => "datetime",
            FieldType::Id => "id",
            FieldType::Version => "version",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A named, typed field declared on a schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// The name of the field
    name: String,
    /// The field type
    field_type: FieldType,
}

impl FieldDefinition {
    /// Create a new field definition.
    pub fn new<S: Into<String>>(name: S, field_type: FieldType) -> Self {
        FieldDefinition {
            name: name.into(),
            field_type,
        }
    }

    /// Get the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the field type.
    pub fn field_type(&self) -> FieldType {
        self.field_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_definition() {
        let field = FieldDefinition::new("content", FieldType::Text);
        assert_eq!(field.name(), "content");
        assert_eq!(field.field_type(), FieldType::Text);
        assert_eq!(field.field_type().to_string(), "text");
    }

    #[test]
    fn test_internal_types() {
        assert!(FieldType::Id.is_internal());
        assert!(FieldType::Version.is_internal());
        assert!(!FieldType::Integer.is_internal());
    }
}
