//! Metadata index persistence
//!
//! All entries live in a single pretty-printed JSON array at
//! `<root>/metadata.json`. The index is small (a personal cache holds at
//! most hundreds of entries), so every mutation is a full load + rewrite.

use crate::error::{PouchError, PouchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use uuid::Uuid;

/// Metadata record for one cached payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry id, also the blob filename key
    pub id: Uuid,

    /// Free-text description supplied at save time
    pub label: String,

    /// When the entry was saved
    pub created: DateTime<Utc>,

    /// When the entry was last retrieved
    pub last_used: DateTime<Utc>,

    /// Payload size in bytes at save time
    pub size: u64,
}

impl Entry {
    /// Create a new entry stamped with the current time
    pub fn new(id: Uuid, label: String, size: u64) -> Self {
        let now = Utc::now();
        Self {
            id,
            label,
            created: now,
            last_used: now,
            size,
        }
    }
}

/// Whole-file JSON index of cache entries
pub struct MetadataStore {
    path: PathBuf,
}

impl MetadataStore {
    /// Index file name under the cache root
    pub const FILE_NAME: &'static str = "metadata.json";

    pub fn new(root: &Path) -> Self {
        Self {
            path: root.join(Self::FILE_NAME),
        }
    }

    /// Load all entries in stored order. A missing file is an empty store,
    /// not an error; an unparseable file is surfaced as corruption rather
    /// than silently discarded.
    pub async fn load(&self) -> PouchResult<Vec<Entry>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(vec![]),
            Err(e) => {
                return Err(PouchError::io(
                    format!("reading metadata index {}", self.path.display()),
                    e,
                ))
            }
        };

        serde_json::from_str(&content).map_err(|e| PouchError::MetadataCorrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Rewrite the whole index. Serializes to a temp file next to the
    /// index and renames it into place so a concurrent reader never sees
    /// a truncated file.
    pub async fn save(&self, entries: &[Entry]) -> PouchResult<()> {
        let content = serde_json::to_string_pretty(entries)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .await
            .map_err(|e| PouchError::io(format!("writing metadata to {}", tmp.display()), e))?;

        fs::rename(&tmp, &self.path).await.map_err(|e| {
            PouchError::io(
                format!("replacing metadata index {}", self.path.display()),
                e,
            )
        })
    }

    /// Append one entry at the end of the index
    pub async fn append(&self, entry: Entry) -> PouchResult<()> {
        let mut entries = self.load().await?;
        entries.push(entry);
        self.save(&entries).await
    }

    /// Update `last_used` for `id` in place. An absent id is not an error;
    /// this is a best-effort refresh.
    pub async fn touch(&self, id: Uuid, when: DateTime<Utc>) -> PouchResult<()> {
        let mut entries = self.load().await?;
        if let Some(entry) = entries.iter_mut().find(|e| e.id == id) {
            entry.last_used = when;
        }
        self.save(&entries).await
    }

    /// Remove the entry with `id`, keeping the rest in order
    pub async fn remove(&self, id: Uuid) -> PouchResult<()> {
        let mut entries = self.load().await?;
        entries.retain(|e| e.id != id);
        self.save(&entries).await
    }

    /// Path of the index file
    pub fn path(&self) -> &Path {
        &self.path
    }
}
