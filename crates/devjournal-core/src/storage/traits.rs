//! Entry store trait definition.
//!
//! The `EntryStore` trait defines the interface every journal backend
//! implements. The CLI only talks to this trait, so a backend can be swapped
//! without touching command handlers.

use chrono::NaiveDate;

use super::config::StoreConfig;
use super::types::{Entry, EntryFilter, EntryId, JournalMetadata, MoodCount, NewEntry, TagCount};
use crate::error::Result;

/// Maximum number of full-text search results.
pub const SEARCH_LIMIT: usize = 20;

/// Storage interface for journal entries.
///
/// All implementations must ensure:
/// - Entries are append-only; ids are never reused
/// - The text index holds exactly one document per entry
/// - An insert and its index document commit together or not at all
pub trait EntryStore: Send + Sync {
    /// Open (creating if needed) the store described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::StorageUnavailable` if the file or its parent
    /// directory cannot be created or opened.
    fn open(config: &StoreConfig) -> Result<Self>
    where
        Self: Sized;

    /// Ensure the schema exists. Idempotent and non-destructive.
    fn initialize(&self) -> Result<()>;

    /// Get store metadata.
    fn metadata(&self) -> Result<JournalMetadata>;

    // --- Entry operations ---

    /// Insert a new entry and index it in the same transaction.
    ///
    /// # Returns
    ///
    /// Returns the id of the created entry.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if:
    /// - Title is empty
    /// - Focus hours are negative or not finite
    /// - A tag is empty after normalization
    fn insert_entry(&mut self, entry: &NewEntry) -> Result<EntryId>;

    /// Get an entry by id.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(entry))` if found, `Ok(None)` if not found.
    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>>;

    /// Entries dated exactly `date`, in insertion order.
    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Entry>>;

    /// Entries with `start <= date <= end`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::Validation` if `start` is after `end`.
    fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>>;

    /// List entries matching the filter, most recent date first.
    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>>;

    /// Search title, body and tags.
    ///
    /// # Returns
    ///
    /// Returns at most [`SEARCH_LIMIT`] entries, most recent date first.
    ///
    /// # Errors
    ///
    /// Returns `JournalError::MalformedQuery` if the query is blank or the
    /// index rejects its syntax.
    fn search_entries(&self, query: &str) -> Result<Vec<Entry>>;

    // --- Aggregates ---

    /// Every day that has at least one entry, most recent first.
    fn distinct_dates(&self) -> Result<Vec<NaiveDate>>;

    /// Entry counts per mood for `since <= date <= until`, best mood first.
    /// Moods with no entries are omitted.
    fn mood_counts(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<MoodCount>>;

    /// Occurrences of each tag across all entries, most frequent first.
    fn tag_frequency(&self) -> Result<Vec<TagCount>>;

    /// Total number of entries.
    fn entry_count(&self) -> Result<usize>;

    // --- Maintenance operations ---

    /// Check store integrity.
    ///
    /// Verifies:
    /// - SQLite page-level consistency
    /// - Every entry has exactly one index document and vice versa
    /// - Every stored mood is a known value
    fn check_integrity(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_definition_compiles() {
        fn _accepts_entry_store<T: EntryStore>(_store: T) {}
    }
}
