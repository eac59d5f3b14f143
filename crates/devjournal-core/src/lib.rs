//! # Devjournal Core
//!
//! Core library for devjournal - a CLI-first daily developer log.
//!
//! This crate owns the persistent entry store and the statistics derived from
//! it, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **storage**: `EntryStore` trait and the SQLite + FTS5 implementation
//! - **stats**: streaks, weekly roll-ups and mood distributions
//! - **fs**: atomic file writes used by exports

pub mod error;
pub mod fs;
pub mod stats;
pub mod storage;

pub use error::{JournalError, Result};
pub use storage::{EntryStore, SqliteStore, StoreConfig};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
