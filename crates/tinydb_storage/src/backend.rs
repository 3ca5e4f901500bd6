//! Storage backend trait definition.

use crate::error::StorageResult;

/// A whole-file storage backend for TinyDB.
///
/// A backend holds at most one snapshot. Every write replaces the previous
/// snapshot in full; there is no merge and no append.
///
/// # Invariants
///
/// - `exists` is `false` until the first successful `write_all`
///   (unless the backend was created over pre-existing content)
/// - `read_all` returns exactly the bytes of the last `write_all`
/// - Backends must be `Send + Sync` so a store can move between threads
///
/// # Implementors
///
/// - [`super::InMemoryBackend`] - For testing
/// - [`super::FileBackend`] - For persistent storage
pub trait StorageBackend: Send + Sync {
    /// Returns whether a snapshot is currently stored.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined.
    fn exists(&self) -> StorageResult<bool>;

    /// Reads the whole stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshot is stored (`NotFound`)
    /// - An I/O error occurs
    fn read_all(&self) -> StorageResult<Vec<u8>>;

    /// Replaces the stored snapshot with `data`.
    ///
    /// # Errors
    ///
    /// Returns an error if an I/O error occurs. No retry is attempted.
    fn write_all(&mut self, data: &[u8]) -> StorageResult<()>;
}
