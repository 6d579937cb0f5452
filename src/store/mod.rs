//! Cache storage
//!
//! [`CacheManager`] is the single entry point: it owns the cache root and
//! coordinates the blob files and the metadata index so the two stay in
//! agreement across every save, retrieve, and clear.

pub mod blobs;
pub mod metadata;
pub mod paths;

pub use metadata::Entry;

use crate::error::{PouchError, PouchResult};
use blobs::BlobStore;
use chrono::Utc;
use metadata::MetadataStore;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

/// Orchestrates blob storage and the metadata index under one root
pub struct CacheManager {
    root: PathBuf,
    blobs: BlobStore,
    meta: MetadataStore,
}

impl CacheManager {
    /// Open (and if needed initialize) a cache rooted at `root`.
    ///
    /// The root is an explicit value rather than ambient state so tests
    /// can point the manager at a temporary directory.
    pub async fn open(root: PathBuf) -> PouchResult<Self> {
        fs::create_dir_all(root.join(BlobStore::DIR_NAME))
            .await
            .map_err(|e| PouchError::io(format!("initializing cache root {}", root.display()), e))?;

        let blobs = BlobStore::new(&root);
        let meta = MetadataStore::new(&root);
        Ok(Self { root, blobs, meta })
    }

    /// Platform default cache root, resolved once per process
    pub fn default_root() -> PathBuf {
        dirs::cache_dir()
            .unwrap_or_else(std::env::temp_dir)
            .join("pouch")
    }

    /// Store `data` under a fresh id and record its metadata.
    ///
    /// The blob is written first. If the metadata append then fails, the
    /// just-written blob is deleted so no orphan survives; cleanup itself
    /// failing leaves a degraded-but-reported state rather than a crash.
    pub async fn save(&self, label: &str, data: &[u8]) -> PouchResult<Uuid> {
        let id = Uuid::new_v4();

        self.blobs.write(id, data).await?;

        let entry = Entry::new(id, label.to_string(), data.len() as u64);
        if let Err(e) = self.meta.append(entry).await {
            if let Err(cleanup) = self.blobs.delete(id).await {
                warn!("Orphan blob {id} left behind after metadata failure: {cleanup}");
            }
            return Err(e);
        }

        debug!("Saved {} bytes as {id}", data.len());
        Ok(id)
    }

    /// Fetch the payload for `id`, bumping its last-used timestamp.
    ///
    /// The id is validated before any filesystem access. The timestamp
    /// bump is best-effort: if it fails after a successful read, the data
    /// is returned anyway.
    pub async fn retrieve(&self, id: &str) -> PouchResult<Vec<u8>> {
        let id = paths::parse_id(id)?;

        let data = self.blobs.read(id).await?;

        if let Err(e) = self.meta.touch(id, Utc::now()).await {
            warn!("Could not refresh last-used time for {id}: {e}");
        }

        Ok(data)
    }

    /// Remove every entry and blob, leaving an empty ready-to-use cache
    pub async fn clear_all(&self) -> PouchResult<()> {
        fs::remove_dir_all(&self.root)
            .await
            .map_err(|e| PouchError::io(format!("clearing cache root {}", self.root.display()), e))?;

        fs::create_dir_all(self.root.join(BlobStore::DIR_NAME))
            .await
            .map_err(|e| {
                PouchError::io(format!("recreating cache root {}", self.root.display()), e)
            })
    }

    /// Remove one entry: blob first, then its metadata record.
    ///
    /// If the blob cannot be deleted (including already missing), the
    /// metadata is left untouched so index and blobs never silently
    /// disagree.
    pub async fn clear_one(&self, id: &str) -> PouchResult<()> {
        let id = paths::parse_id(id)?;

        self.blobs.delete(id).await?;
        self.meta.remove(id).await?;

        debug!("Cleared entry {id}");
        Ok(())
    }

    /// All entries in insertion order
    pub async fn list(&self) -> PouchResult<Vec<Entry>> {
        self.meta.load().await
    }

    /// The cache root this manager owns
    pub fn root(&self) -> &Path {
        &self.root
    }
}
