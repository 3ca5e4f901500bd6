//! In-memory storage backend for testing.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::path::PathBuf;

/// An in-memory storage backend.
///
/// This backend keeps the last written snapshot in memory and is suitable for:
/// - Unit tests
/// - Simulating a pre-existing or corrupt backing file
///
/// # Example
///
/// ```rust
/// use tinydb_storage::{StorageBackend, InMemoryBackend};
///
/// let mut backend = InMemoryBackend::new();
/// backend.write_all(b"test data").unwrap();
/// assert_eq!(backend.data(), Some(b"test data".to_vec()));
/// ```
#[derive(Debug, Default, Clone)]
pub struct InMemoryBackend {
    data: Option<Vec<u8>>,
}

impl InMemoryBackend {
    /// Creates a new empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory backend with a pre-existing snapshot.
    ///
    /// Useful for testing load and corruption scenarios.
    #[must_use]
    pub fn with_data(data: Vec<u8>) -> Self {
        Self { data: Some(data) }
    }

    /// Returns a copy of the stored snapshot, if any.
    #[must_use]
    pub fn data(&self) -> Option<Vec<u8>> {
        self.data.clone()
    }
}

impl StorageBackend for InMemoryBackend {
    fn exists(&self) -> StorageResult<bool> {
        Ok(self.data.is_some())
    }

    fn read_all(&self) -> StorageResult<Vec<u8>> {
        self.data.clone().ok_or_else(|| StorageError::NotFound {
            path: PathBuf::from(":memory:"),
        })
    }

    fn write_all(&mut self, data: &[u8]) -> StorageResult<()> {
        self.data = Some(data.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_new_is_empty() {
        let backend = InMemoryBackend::new();
        assert!(!backend.exists().unwrap());
        assert!(backend.data().is_none());
    }

    #[test]
    fn memory_read_empty_is_not_found() {
        let backend = InMemoryBackend::new();
        let result = backend.read_all();
        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    }

    #[test]
    fn memory_write_replaces_snapshot() {
        let mut backend = InMemoryBackend::new();

        backend.write_all(b"first").unwrap();
        backend.write_all(b"second").unwrap();

        assert_eq!(backend.read_all().unwrap(), b"second");
    }

    #[test]
    fn memory_with_data() {
        let backend = InMemoryBackend::with_data(b"preloaded".to_vec());
        assert!(backend.exists().unwrap());
        assert_eq!(backend.read_all().unwrap(), b"preloaded");
    }
}
