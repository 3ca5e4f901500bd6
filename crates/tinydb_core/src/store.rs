//! Store facade.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::document::{Document, DocumentId};
use crate::error::CoreResult;
use crate::query::Query;
use crate::snapshot::{self, Collections};
use std::path::{Path, PathBuf};
use tinydb_codec::Value;
use tinydb_storage::{FileBackend, StorageBackend};
use tracing::{debug, info, trace};

/// The document store.
///
/// `Store` exclusively owns every collection. It provides:
/// - Lazy collection creation on first insert
/// - Exact-match queries over a collection
/// - Optional mirroring of the whole state to one backing file
///
/// # Opening a Store
///
/// ```rust,no_run
/// use tinydb_core::{Config, Store};
///
/// // Loads `db.json` if present, otherwise starts empty.
/// let store = Store::open(Config::new().persistence_file("db.json"))?;
/// # Ok::<(), tinydb_core::CoreError>(())
/// ```
///
/// # Persistence
///
/// Every successful insert rewrites the backing file in full before
/// returning. The file is assumed to belong to this store alone; a second
/// writer on the same path silently wins or loses whole snapshots.
pub struct Store {
    /// Backing file path, when opened from a config that names one.
    path: Option<PathBuf>,
    /// Snapshot storage. `None` for in-memory stores.
    backend: Option<Box<dyn StorageBackend>>,
    /// Source of `createdAt` timestamps.
    clock: Box<dyn Clock>,
    /// All collections, in first-insert order.
    collections: Collections,
}

impl Store {
    /// Opens a store from a configuration.
    ///
    /// With a persistence file that exists, the whole state is loaded from
    /// it. A missing file means an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file exists but cannot be read (`Storage`)
    /// - The file content is not a valid snapshot (`Parse`)
    pub fn open(config: Config) -> CoreResult<Self> {
        let backend = config
            .persistence_file
            .as_ref()
            .map(|path| Box::new(FileBackend::new(path)) as Box<dyn StorageBackend>);

        let mut store = Self::open_with_backend(backend, Box::new(SystemClock))?;
        store.path = config.persistence_file;
        Ok(store)
    }

    /// Opens a store mirrored to `path`.
    ///
    /// # Errors
    ///
    /// See [`Store::open`].
    pub fn open_file(path: impl Into<PathBuf>) -> CoreResult<Self> {
        Self::open(Config::new().persistence_file(path))
    }

    /// Creates an empty store that lives only in memory.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            backend: None,
            clock: Box::new(SystemClock),
            collections: Collections::new(),
        }
    }

    /// Opens a store over an explicit backend and clock.
    ///
    /// This is a lower-level constructor for tests and custom storage.
    /// Pass `None` for a memory-only store.
    ///
    /// # Errors
    ///
    /// Same as [`Store::open`].
    pub fn open_with_backend(
        backend: Option<Box<dyn StorageBackend>>,
        clock: Box<dyn Clock>,
    ) -> CoreResult<Self> {
        let mut store = Self {
            path: None,
            backend,
            clock,
            collections: Collections::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Inserts a document and returns its new identifier.
    ///
    /// The stored document is the caller's fields with `id` and `createdAt`
    /// overwritten by system values. The collection is created if this is
    /// the first insert into `collection`. Any name is accepted, including
    /// the empty string.
    ///
    /// # Errors
    ///
    /// Returns `Storage` if the backing file cannot be written. The document
    /// stays in memory in that case; nothing is rolled back.
    pub fn insert<K, I>(&mut self, collection: &str, data: I) -> CoreResult<DocumentId>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let id = DocumentId::new();
        let data = data.into_iter().map(|(k, v)| (k.into(), v)).collect();
        let document = Document::new(id.clone(), self.clock.timestamp(), data);

        if !self.collections.contains_key(collection) {
            debug!(collection, "creating collection");
        }
        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document);
        trace!(collection, %id, "inserted document");

        self.persist()?;
        Ok(id)
    }

    /// Returns the documents of `collection` that match `query`.
    ///
    /// Without a query every document is returned. Results are copies in
    /// insertion order; an unknown collection yields an empty vector.
    #[must_use]
    pub fn find(&self, collection: &str, query: Option<&Query>) -> Vec<Document> {
        let Some(documents) = self.collections.get(collection) else {
            return Vec::new();
        };

        match query {
            None => documents.clone(),
            Some(query) => documents
                .iter()
                .filter(|doc| query.matches(doc))
                .cloned()
                .collect(),
        }
    }

    /// Returns every collection name in first-insert order.
    #[must_use]
    pub fn collections(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    /// Returns the number of documents in `collection` (0 if unknown).
    #[must_use]
    pub fn count(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, Vec::len)
    }

    /// Returns whether inserts are mirrored to a backend.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.backend.is_some()
    }

    /// Returns the persistence file, if the store was opened with one.
    #[must_use]
    pub fn persistence_file(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Writes the whole state to the backend.
    fn persist(&mut self) -> CoreResult<()> {
        let Some(backend) = self.backend.as_mut() else {
            return Ok(());
        };

        let bytes = snapshot::encode(&self.collections)?;
        backend.write_all(&bytes)?;
        trace!(bytes = bytes.len(), "persisted snapshot");
        Ok(())
    }

    /// Replaces the in-memory state with the backend's snapshot, if one exists.
    fn load(&mut self) -> CoreResult<()> {
        let Some(backend) = self.backend.as_ref() else {
            return Ok(());
        };

        if !backend.exists()? {
            debug!("no snapshot found, starting empty");
            return Ok(());
        }

        let bytes = backend.read_all()?;
        self.collections = snapshot::decode(&bytes)?;

        info!(
            collections = self.collections.len(),
            documents = self.collections.values().map(Vec::len).sum::<usize>(),
            "loaded snapshot"
        );
        Ok(())
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("path", &self.path)
            .field("persistent", &self.is_persistent())
            .field("collections", &self.collections.len())
            .finish_non_exhaustive()
    }
}
