//! Document identifiers.
//!
//! Ids are 12 bytes written as 24 hex characters, the same shape as a
//! MongoDB ObjectId, so ids coming from such stores round-trip unchanged.
//!
//! ```
//! use morelike::document::DocumentId;
//!
//! let id = DocumentId::parse("507f1f77bcf86cd799439011").unwrap();
//! assert_eq!(id.to_string(), "507f1f77bcf86cd799439011");
//!
//! assert!(DocumentId::parse("123456").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

use crate::error::{MoreLikeError, Result};

/// Number of raw bytes in an id.
pub const ID_BYTES: usize = 12;

/// A 12-byte document identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId([u8; ID_BYTES]);

impl DocumentId {
    /// Create an id from raw bytes.
    pub fn from_bytes(bytes: [u8; ID_BYTES]) -> Self {
        DocumentId(bytes)
    }

    /// Draw a fresh random id.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4();
        let mut bytes = [0u8; ID_BYTES];
        bytes.copy_from_slice(&uuid.as_bytes()[..ID_BYTES]);
        DocumentId(bytes)
    }

    /// Parse a 24 character hex string. Anything else is `InvalidInput`.
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() != ID_BYTES * 2 || !input.is_ascii() {
            return Err(MoreLikeError::invalid_input(format!(
                "'{input}' is not a valid document id"
            )));
        }

        let mut bytes = [0u8; ID_BYTES];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&input[i * 2..i * 2 + 2], 16).map_err(|_| {
                MoreLikeError::invalid_input(format!("'{input}' is not a valid document id"))
            })?;
        }

        Ok(DocumentId(bytes))
    }

    /// Whether the string would parse as an id.
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// The raw bytes.
    pub fn bytes(&self) -> &[u8; ID_BYTES] {
        &self.0
    }

    /// Lowercase hex form.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for DocumentId {
    type Err = MoreLikeError;

    fn from_str(s: &str) -> Result<Self> {
        DocumentId::parse(s)
    }
}

impl Serialize for DocumentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DocumentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct IdVisitor;

        impl Visitor<'_> for IdVisitor {
            type Value = DocumentId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a 24 character hex document id")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<DocumentId, E> {
                DocumentId::parse(value).map_err(E::custom)
            }
        }

        deserializer.deserialize_str(IdVisitor)
    }
}
