//! Error types for journal core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! user-facing messages and exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for journal operations.
pub type Result<T> = std::result::Result<T, JournalError>;

/// Core error type for journal operations.
#[derive(Debug, Error)]
pub enum JournalError {
    /// Entry data failed validation (mood, title, hours, tags, ranges)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Full-text query rejected by the search index
    #[error("Malformed search query: {0}")]
    MalformedQuery(String),

    /// The backing store could not be created or opened
    #[error("Journal store unavailable at {}: {reason}", path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    /// Stored data is inconsistent or corrupted
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl JournalError {
    /// Whether the error was caused by caller input rather than the store.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            JournalError::Validation(_) | JournalError::MalformedQuery(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_unavailable_mentions_path() {
        let err = JournalError::StorageUnavailable {
            path: PathBuf::from("/nope/journal.db"),
            reason: "permission denied".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("/nope/journal.db"));
        assert!(message.contains("permission denied"));
    }

    #[test]
    fn test_user_error_classification() {
        assert!(JournalError::Validation("bad mood".into()).is_user_error());
        assert!(JournalError::MalformedQuery("\"".into()).is_user_error());
        assert!(!JournalError::Storage("broken".into()).is_user_error());
    }
}
