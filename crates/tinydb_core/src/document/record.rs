//! Stored document record.

use super::DocumentId;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;
use tinydb_codec::{Fields, Value};

/// Name of the system-assigned identifier field.
pub const ID_FIELD: &str = "id";

/// Name of the system-assigned creation timestamp field.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// One stored record: the caller's fields plus `id` and `createdAt`.
///
/// The full field mapping is kept in stored order: `id` first, then the
/// caller's fields, then `createdAt`. Documents are immutable once built.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Fields")]
pub struct Document {
    id: DocumentId,
    created_at: String,
    fields: Fields,
}

impl Document {
    /// Builds a document from caller data and the system fields.
    ///
    /// The caller's fields are merged first. `id` and `createdAt` are then
    /// overwritten, so caller-supplied values for either never survive.
    pub(crate) fn new(id: DocumentId, created_at: String, data: Fields) -> Self {
        let mut fields = Fields::with_capacity(data.len() + 2);
        fields.insert(ID_FIELD.to_string(), Value::Null);
        fields.extend(data);
        fields.shift_remove(CREATED_AT_FIELD);

        fields.insert(ID_FIELD.to_string(), Value::Text(id.as_str().to_string()));
        fields.insert(CREATED_AT_FIELD.to_string(), Value::Text(created_at.clone()));

        Self {
            id,
            created_at,
            fields,
        }
    }

    /// Returns the document identifier.
    #[must_use]
    pub fn id(&self) -> &DocumentId {
        &self.id
    }

    /// Returns the creation timestamp text.
    #[must_use]
    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Looks up a field, including `id` and `createdAt`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns every field in stored order.
    #[must_use]
    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Consumes the document, returning its fields.
    #[must_use]
    pub fn into_fields(self) -> Fields {
        self.fields
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Why a stored field mapping cannot be read back as a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDocument {
    /// A system field is absent.
    #[error("document is missing its `{0}` field")]
    MissingField(&'static str),

    /// A system field holds something other than text.
    #[error("document `{field}` must be a string, got {found}")]
    NotText {
        /// The offending system field.
        field: &'static str,
        /// Type name of the value found instead.
        found: &'static str,
    },
}

fn text_field(fields: &Fields, field: &'static str) -> Result<String, InvalidDocument> {
    match fields.get(field) {
        Some(Value::Text(text)) => Ok(text.clone()),
        Some(other) => Err(InvalidDocument::NotText {
            field,
            found: other.type_name(),
        }),
        None => Err(InvalidDocument::MissingField(field)),
    }
}

/// Rebuilds a stored document.
///
/// `id` and `createdAt` must be present and textual. Their content is kept
/// as-is: any identifier scheme and timestamp rendering is accepted.
impl TryFrom<Fields> for Document {
    type Error = InvalidDocument;

    fn try_from(fields: Fields) -> Result<Self, Self::Error> {
        let id = DocumentId::from(text_field(&fields, ID_FIELD)?);
        let created_at = text_field(&fields, CREATED_AT_FIELD)?;

        Ok(Self {
            id,
            created_at,
            fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2026-10-16T09:30:00.000Z";

    fn data(pairs: &[(&str, Value)]) -> Fields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn system_fields_win() {
        let id = DocumentId::new();
        let doc = Document::new(
            id.clone(),
            TS.to_string(),
            data(&[
                ("id", Value::from("x")),
                ("createdAt", Value::from("bogus")),
                ("name", Value::from("Ann")),
            ]),
        );

        assert_eq!(doc.id(), &id);
        assert_eq!(doc.get("id"), Some(&Value::Text(id.to_string())));
        assert_eq!(doc.created_at(), TS);
        assert_eq!(doc.get("createdAt"), Some(&Value::from(TS)));
        assert_eq!(doc.get("name"), Some(&Value::from("Ann")));
    }

    #[test]
    fn stored_field_order() {
        let doc = Document::new(
            DocumentId::new(),
            TS.to_string(),
            data(&[
                ("name", Value::from("Ann")),
                ("createdAt", Value::from("bogus")),
                ("age", Value::from(30)),
                ("id", Value::from("x")),
            ]),
        );

        let keys: Vec<&str> = doc.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["id", "name", "age", "createdAt"]);
    }

    #[test]
    fn from_fields_roundtrip() {
        let doc = Document::new(DocumentId::new(), TS.to_string(), data(&[("a", Value::from(1))]));
        let rebuilt = Document::try_from(doc.fields().clone()).unwrap();
        assert_eq!(rebuilt, doc);
    }

    #[test]
    fn from_fields_requires_id() {
        let result = Document::try_from(data(&[("createdAt", Value::from(TS))]));
        assert_eq!(result, Err(InvalidDocument::MissingField(ID_FIELD)));
    }

    #[test]
    fn from_fields_rejects_non_text_id() {
        let result = Document::try_from(data(&[
            ("id", Value::from(7)),
            ("createdAt", Value::from(TS)),
        ]));
        assert_eq!(
            result,
            Err(InvalidDocument::NotText {
                field: ID_FIELD,
                found: "number"
            })
        );
    }

    #[test]
    fn from_fields_keeps_foreign_id_and_timestamp() {
        let fields = data(&[
            ("id", Value::from("x")),
            ("name", Value::from("Ann")),
            ("createdAt", Value::from("+010000-01-01T00:00:00.000Z")),
        ]);
        let doc = Document::try_from(fields.clone()).unwrap();

        assert_eq!(doc.id().as_str(), "x");
        assert_eq!(doc.created_at(), "+010000-01-01T00:00:00.000Z");
        assert_eq!(doc.fields(), &fields);
    }

    #[test]
    fn from_fields_requires_created_at() {
        let result = Document::try_from(data(&[("id", Value::Text(DocumentId::new().into_string()))]));
        assert_eq!(result, Err(InvalidDocument::MissingField(CREATED_AT_FIELD)));
    }

    #[test]
    fn invalid_document_messages() {
        assert_eq!(
            InvalidDocument::MissingField(ID_FIELD).to_string(),
            "document is missing its `id` field"
        );
        assert_eq!(
            InvalidDocument::NotText {
                field: CREATED_AT_FIELD,
                found: "null"
            }
            .to_string(),
            "document `createdAt` must be a string, got null"
        );
    }
}
