//! Pluggable key-value blob persistence.
//!
//! The entry collection is persisted through this seam so that nothing above
//! it assumes a particular storage medium.

use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// Storage key of the serialized entry collection.
pub const ENTRIES_KEY: &str = "time_tracker_entries";

pub trait BlobStore {
    /// Returns the blob stored under `key`, or `None` if absent.
    fn read(&self, key: &str) -> AppResult<Option<Vec<u8>>>;

    fn write(&self, key: &str, blob: &[u8]) -> AppResult<()>;
}

/// Blob store keeping one `<key>.json` file per key inside a base directory.
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: &str) -> Self {
        Self {
            base: expand_tilde(base),
        }
    }

    /// Full path of the file backing `key`. Exposed so backup can copy it.
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.base.join(format!("{}.json", key))
    }
}

impl BlobStore for FileStore {
    fn read(&self, key: &str) -> AppResult<Option<Vec<u8>>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }

        fs::read(&path)
            .map(Some)
            .map_err(|e| AppError::Storage(format!("failed to read {}: {}", path.display(), e)))
    }

    fn write(&self, key: &str, blob: &[u8]) -> AppResult<()> {
        fs::create_dir_all(&self.base)
            .map_err(|e| AppError::Storage(format!("failed to create {}: {}", self.base.display(), e)))?;

        let path = self.path_for(key);
        fs::write(&path, blob)
            .map_err(|e| AppError::Storage(format!("failed to write {}: {}", path.display(), e)))
    }
}
