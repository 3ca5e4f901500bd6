//! Store configuration.

use std::path::{Path, PathBuf};

/// Configuration for opening a store.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File mirroring the whole store. `None` keeps the store in memory only.
    pub persistence_file: Option<PathBuf>,
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the persistence file.
    #[must_use]
    pub fn persistence_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.persistence_file = Some(path.into());
        self
    }

    /// Returns the configured persistence file, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.persistence_file.as_deref()
    }
}
