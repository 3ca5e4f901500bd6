//! Document identifier.

use std::fmt;
use uuid::Uuid;

/// Unique identifier for a document.
///
/// An identifier is opaque text. Fresh identifiers are random (v4) UUIDs
/// rendered in canonical hyphenated lowercase form; collisions are treated
/// as impossible. Identifiers read back from a snapshot are kept verbatim,
/// whatever scheme produced them.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new random document ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().hyphenated().to_string())
    }

    /// Returns the identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for DocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DocumentId({})", self.0)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for DocumentId {
    fn from(text: String) -> Self {
        Self(text)
    }
}

impl From<&str> for DocumentId {
    fn from(text: &str) -> Self {
        Self(text.to_string())
    }
}

impl From<Uuid> for DocumentId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid.hyphenated().to_string())
    }
}

impl From<DocumentId> for String {
    fn from(id: DocumentId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_unique() {
        let id1 = DocumentId::new();
        let id2 = DocumentId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn new_is_random_v4() {
        let id = DocumentId::new();
        let uuid = Uuid::parse_str(id.as_str()).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(id.as_str(), uuid.hyphenated().to_string());
    }

    #[test]
    fn display_is_the_text() {
        assert_eq!(DocumentId::from(Uuid::nil()).to_string(), "00000000-0000-0000-0000-000000000000");
        assert_eq!(DocumentId::from("user-7").to_string(), "user-7");
    }

    #[test]
    fn any_text_is_an_id() {
        let id = DocumentId::from("x");
        assert_eq!(id.as_str(), "x");
        assert_eq!(String::from(id), "x");
        assert_eq!(DocumentId::from(String::new()).as_str(), "");
    }
}
