//! Blob storage
//!
//! One raw file per entry under `<root>/data/`, named `<id>.data`. No
//! wrapping format; the bytes on disk are exactly the bytes saved.

use crate::error::{PouchError, PouchResult};
use crate::store::paths::safe_join;
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Maps entry ids to payload files under the `data` subdirectory
pub struct BlobStore {
    root: PathBuf,
}

impl BlobStore {
    /// Blob subdirectory name under the cache root
    pub const DIR_NAME: &'static str = "data";

    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Create or overwrite the blob for `id`
    pub async fn write(&self, id: Uuid, data: &[u8]) -> PouchResult<()> {
        let path = self.blob_path(id)?;
        fs::write(&path, data)
            .await
            .map_err(|e| PouchError::io(format!("writing blob {}", path.display()), e))
    }

    /// Read the blob for `id`. A missing file is a cache miss, distinct
    /// from other I/O failures.
    pub async fn read(&self, id: Uuid) -> PouchResult<Vec<u8>> {
        let path = self.blob_path(id)?;
        match fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PouchError::CacheMiss(id)),
            Err(e) => Err(PouchError::io(format!("reading blob {}", path.display()), e)),
        }
    }

    /// Delete the blob for `id`. Deleting a blob that is not there is a
    /// cache miss; callers rely on this to keep the index in sync.
    pub async fn delete(&self, id: Uuid) -> PouchResult<()> {
        let path = self.blob_path(id)?;
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(PouchError::CacheMiss(id)),
            Err(e) => Err(PouchError::io(format!("deleting blob {}", path.display()), e)),
        }
    }

    /// Resolve the on-disk path for `id` through the path safety guard.
    ///
    /// The filename comes from the parsed id's hyphenated form, but the
    /// guard still runs as a second line of defense.
    fn blob_path(&self, id: Uuid) -> PouchResult<PathBuf> {
        let relative = Path::new(Self::DIR_NAME).join(format!("{}.data", id.as_hyphenated()));
        safe_join(&self.root, relative)
    }
}
