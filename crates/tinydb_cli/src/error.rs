//! CLI error type.

use std::io;
use thiserror::Error;

/// Errors reported by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The store could not be opened or written.
    #[error(transparent)]
    Store(#[from] tinydb_core::CoreError),

    /// A JSON argument could not be parsed.
    #[error("invalid JSON for {arg}: {source}")]
    InvalidJson {
        /// Argument name.
        arg: &'static str,
        /// Underlying decode error.
        source: tinydb_codec::CodecError,
    },

    /// A JSON argument parsed, but is not an object.
    #[error("{arg} must be a JSON object, got {found}")]
    NotAnObject {
        /// Argument name.
        arg: &'static str,
        /// JSON type that was supplied.
        found: &'static str,
    },

    /// Results could not be encoded for output.
    #[error("failed to encode output: {0}")]
    Output(#[from] tinydb_codec::CodecError),

    /// Writing to stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
