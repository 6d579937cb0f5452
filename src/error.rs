//! Error types for Pouch
//!
//! All modules use `PouchResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for Pouch operations
pub type PouchResult<T> = Result<T, PouchError>;

/// All errors that can occur in Pouch
#[derive(Error, Debug)]
pub enum PouchError {
    // Identifier errors
    #[error("Invalid cache id: {0}")]
    InvalidId(String),

    #[error("No cached entry for id {0}")]
    CacheMiss(Uuid),

    // Storage errors
    #[error("Path escapes the cache root: {path}")]
    PathEscape { path: PathBuf },

    #[error("Metadata index at {path} is unreadable: {reason}")]
    MetadataCorrupt { path: PathBuf, reason: String },

    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    // Input errors
    #[error("Nothing piped to stdin")]
    NotPiped,

    #[error("A label is required. Pass one with -l/--label")]
    LabelRequired,

    #[error("Piped input exceeds the configured limit of {limit} bytes")]
    PayloadTooLarge { limit: u64 },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PouchError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// True for lookups of entries that simply are not there, as opposed
    /// to storage going wrong underneath us.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CacheMiss(_) | Self::InvalidId(_))
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::NotPiped => Some("Pipe something in: some-command | pouch save -l \"label\""),
            Self::LabelRequired => Some("Example: pouch save -l \"nmap scan\""),
            Self::CacheMiss(_) | Self::InvalidId(_) => Some("Run: pouch list"),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = PouchError::InvalidId("nope".to_string());
        assert!(err.to_string().contains("Invalid cache id"));
    }

    #[test]
    fn error_hint() {
        let err = PouchError::LabelRequired;
        assert_eq!(err.hint(), Some("Example: pouch save -l \"nmap scan\""));
    }

    #[test]
    fn not_found_classification() {
        assert!(PouchError::CacheMiss(Uuid::new_v4()).is_not_found());
        assert!(PouchError::InvalidId("x".into()).is_not_found());
        assert!(!PouchError::NotPiped.is_not_found());
    }
}
