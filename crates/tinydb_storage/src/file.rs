//! File-based storage backend for persistent storage.

use crate::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{trace, warn};

/// Suffix appended to the target path for the in-flight snapshot.
const TEMP_SUFFIX: &str = ".tmp";

/// A file-based storage backend.
///
/// The snapshot lives in a single file. Data survives process restarts.
///
/// # Durability
///
/// `write_all` uses the write-then-rename pattern:
/// 1. Write the snapshot to `<path>.tmp`
/// 2. Sync the temporary file to disk
/// 3. Rename it over `<path>`
///
/// A crash mid-write leaves the previous snapshot in place. There is no
/// journal and no file locking; two writers on one path race and the last
/// rename wins.
///
/// # Example
///
/// ```no_run
/// use tinydb_storage::{StorageBackend, FileBackend};
///
/// let mut backend = FileBackend::new("data/db.json");
/// backend.write_all(b"{}").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend keyed by `path`.
    ///
    /// Nothing is touched on disk until the first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(TEMP_SUFFIX);
        PathBuf::from(name)
    }
}

impl StorageBackend for FileBackend {
    fn exists(&self) -> StorageResult<bool> {
        Ok(self.path.try_exists()?)
    }

    fn read_all(&self) -> StorageResult<Vec<u8>> {
        match fs::read(&self.path) {
            Ok(data) => {
                trace!(path = %self.path.display(), bytes = data.len(), "read snapshot");
                Ok(data)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(StorageError::NotFound {
                path: self.path.clone(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&mut self, data: &[u8]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp_path = self.temp_path();
        if let Err(e) = replace_with(&temp_path, &self.path, data) {
            // The target is untouched; only the partial temp file needs removing.
            if let Err(cleanup) = fs::remove_file(&temp_path) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    warn!(path = %temp_path.display(), error = %cleanup, "failed to remove temp file");
                }
            }
            return Err(e.into());
        }
        trace!(path = %self.path.display(), bytes = data.len(), "wrote snapshot");

        Ok(())
    }
}

/// Writes `data` to `temp_path`, syncs it, then renames it over `target`.
fn replace_with(temp_path: &Path, target: &Path, data: &[u8]) -> io::Result<()> {
    let mut file = File::create(temp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    drop(file);

    fs::rename(temp_path, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_missing_does_not_exist() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("db.json"));

        assert!(!backend.exists().unwrap());
        assert!(!backend.path().exists());
    }

    #[test]
    fn file_read_missing_is_not_found() {
        let dir = tempdir().unwrap();
        let backend = FileBackend::new(dir.path().join("db.json"));

        let result = backend.read_all();
        assert!(matches!(result, Err(StorageError::NotFound { .. })));
    }

    #[test]
    fn file_write_and_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut backend = FileBackend::new(&path);
        backend.write_all(b"hello world").unwrap();

        assert!(backend.exists().unwrap());
        assert_eq!(backend.read_all().unwrap(), b"hello world");
    }

    #[test]
    fn file_write_overwrites_wholesale() {
        let dir = tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("db.json"));

        backend.write_all(b"a much longer first snapshot").unwrap();
        backend.write_all(b"short").unwrap();

        assert_eq!(backend.read_all().unwrap(), b"short");
    }

    #[test]
    fn file_write_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let mut backend = FileBackend::new(&path);
        backend.write_all(b"{}").unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("db.json.tmp").exists());
    }

    #[test]
    fn failed_write_removes_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");
        // A directory at the target makes the final rename fail.
        fs::create_dir(&path).unwrap();

        let mut backend = FileBackend::new(&path);
        let result = backend.write_all(b"{}");

        assert!(matches!(result, Err(StorageError::Io(_))));
        assert!(!dir.path().join("db.json.tmp").exists());
        assert!(path.is_dir());
    }

    #[test]
    fn file_persistence() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        {
            let mut backend = FileBackend::new(&path);
            backend.write_all(b"persistent data").unwrap();
        }

        {
            let backend = FileBackend::new(&path);
            assert!(backend.exists().unwrap());
            assert_eq!(backend.read_all().unwrap(), b"persistent data");
        }
    }

    #[test]
    fn file_write_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("path").join("db.json");

        let mut backend = FileBackend::new(&path);
        backend.write_all(b"{}").unwrap();

        assert!(path.exists());
    }

    #[test]
    fn file_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("db.json");

        let backend = FileBackend::new(&path);
        assert_eq!(backend.path(), path);
    }
}
