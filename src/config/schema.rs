//! Configuration schema for Pouch
//!
//! Configuration is stored at `~/.config/pouch/config.toml`

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Cache storage settings
    pub cache: CacheConfig,

    /// List output settings
    pub list: ListConfig,
}

/// Cache storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache root override; platform cache dir when unset
    pub root: Option<PathBuf>,

    /// Maximum accepted stdin payload in bytes (0 = unlimited)
    pub max_payload_bytes: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            root: None,
            max_payload_bytes: 0,
        }
    }
}

/// List output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Column width labels are truncated to in table output
    pub label_width: usize,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self { label_width: 40 }
    }
}
