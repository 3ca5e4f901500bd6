//! Exact-match queries.

use crate::document::Document;
use tinydb_codec::{Fields, Value};

/// A conjunctive exact-match filter.
///
/// A document matches when, for every key in the query, it has that key
/// with a strictly equal value (see [`Value::strict_eq`]). A missing key
/// and a key holding a different value are both plain non-matches.
/// An empty query matches every document.
///
/// ```rust
/// use tinydb_core::Query;
///
/// let query = Query::new().eq("name", "Ann").eq("age", 30);
/// assert_eq!(query.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    fields: Fields,
}

impl Query {
    /// Creates an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality condition. A repeated key replaces the earlier value.
    #[must_use]
    pub fn eq(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Returns the number of conditions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the query has no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Tests a document against every condition.
    #[must_use]
    pub fn matches(&self, document: &Document) -> bool {
        self.fields
            .iter()
            .all(|(key, expected)| document.get(key).is_some_and(|v| v.strict_eq(expected)))
    }
}

impl From<Fields> for Query {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Query {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
