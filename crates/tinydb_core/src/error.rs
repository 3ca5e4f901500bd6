//! Error types for TinyDB core.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in TinyDB core operations.
///
/// Queries never fail: unknown collections and empty results are normal
/// outcomes. Errors come only from the backing file.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The backing file could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] tinydb_storage::StorageError),

    /// The in-memory state could not be encoded.
    #[error("codec error: {0}")]
    Codec(#[from] tinydb_codec::CodecError),

    /// The backing file exists but its content is not a valid snapshot.
    #[error("parse error: {message}")]
    Parse {
        /// Description of the malformed content.
        message: String,
    },
}

impl CoreError {
    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
