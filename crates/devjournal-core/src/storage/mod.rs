//! Storage abstraction for the journal.
//!
//! This module defines the `EntryStore` trait and the core types for
//! persisting and querying entries.
//!
//! ## Architecture
//!
//! - `SqliteStore`: a single SQLite file holding the `entries` table and an
//!   FTS5 index kept in lockstep with it
//!
//! All stores implement the `EntryStore` trait, which provides a consistent
//! interface for inserts, lookups, search and aggregates.

pub mod config;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use config::StoreConfig;
pub use sqlite::SqliteStore;
pub use traits::{EntryStore, SEARCH_LIMIT};
pub use types::{
    Entry, EntryFilter, EntryId, JournalMetadata, Mood, MoodCount, NewEntry, TagCount,
};
