//! Entry row type for database queries.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::{JournalError, Result};
use crate::storage::types::{Entry, Mood};

use super::validation::decode_list;

/// Column list matching [`EntryRow::from_sql_row`], qualified with alias `e`.
pub const ENTRY_COLUMNS: &str = "e.id, e.date, e.title, e.body, e.tags_json, e.mood, \
     e.focus_hours, e.accomplishments_json, e.blockers_json, e.tomorrow_json, e.created_at";

/// Raw row data from the entries table, before parsing into domain types.
#[derive(Debug)]
pub struct EntryRow {
    pub id: i64,
    pub date: String,
    pub title: String,
    pub body: String,
    pub tags_json: String,
    pub mood: String,
    pub focus_hours: f64,
    pub accomplishments_json: String,
    pub blockers_json: String,
    pub tomorrow_json: String,
    pub created_at: String,
}

impl EntryRow {
    /// Read a row selected with [`ENTRY_COLUMNS`].
    pub fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            date: row.get(1)?,
            title: row.get(2)?,
            body: row.get(3)?,
            tags_json: row.get(4)?,
            mood: row.get(5)?,
            focus_hours: row.get(6)?,
            accomplishments_json: row.get(7)?,
            blockers_json: row.get(8)?,
            tomorrow_json: row.get(9)?,
            created_at: row.get(10)?,
        })
    }
}

impl TryFrom<EntryRow> for Entry {
    type Error = JournalError;

    fn try_from(row: EntryRow) -> Result<Self> {
        let date = parse_date(&row.date)?;
        let mood: Mood = row.mood.parse().map_err(|_| {
            JournalError::Storage(format!("Invalid mood {:?} in entry {}", row.mood, row.id))
        })?;
        let created_at = DateTime::parse_from_rfc3339(&row.created_at)
            .map_err(|e| JournalError::Storage(format!("Invalid timestamp: {}", e)))?
            .with_timezone(&Utc);

        Ok(Entry {
            id: row.id,
            date,
            title: row.title,
            body: row.body,
            tags: decode_list("tags_json", &row.tags_json)?,
            mood,
            focus_hours: row.focus_hours,
            accomplishments: decode_list("accomplishments_json", &row.accomplishments_json)?,
            blockers: decode_list("blockers_json", &row.blockers_json)?,
            tomorrow: decode_list("tomorrow_json", &row.tomorrow_json)?,
            created_at,
        })
    }
}

/// Parse a stored `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| JournalError::Storage(format!("Invalid entry date {:?}: {}", raw, e)))
}

/// Format a date the way it is stored.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
