//! # TinyDB Storage
//!
//! Storage backend trait and implementations for TinyDB.
//!
//! Backends are **opaque whole-file stores**. They hold exactly one
//! snapshot, keyed by a single location, and do not interpret it.
//!
//! ## Design Principles
//!
//! - Three capabilities only: existence check, whole read, whole overwrite
//! - No partial reads, no appends, no directory scanning
//! - TinyDB owns the snapshot format
//!
//! ## Available Backends
//!
//! - [`InMemoryBackend`] - For testing and ephemeral storage
//! - [`FileBackend`] - For persistent storage using OS file APIs
//!
//! ## Example
//!
//! ```rust
//! use tinydb_storage::{StorageBackend, InMemoryBackend};
//!
//! let mut backend = InMemoryBackend::new();
//! assert!(!backend.exists().unwrap());
//!
//! backend.write_all(b"{}").unwrap();
//! assert_eq!(backend.read_all().unwrap(), b"{}");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod backend;
mod error;
mod file;
mod memory;

pub use backend::StorageBackend;
pub use error::{StorageError, StorageResult};
pub use file::FileBackend;
pub use memory::InMemoryBackend;
