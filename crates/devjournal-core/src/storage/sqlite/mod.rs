//! SQLite storage backend.
//!
//! Entries live in a single SQLite file. Full-text search uses an FTS5 table
//! whose rowids mirror `entries.id`; every insert writes both rows inside one
//! transaction so the index can never drift from the primary table.

mod row;
mod validation;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{JournalError, Result};
use crate::storage::config::StoreConfig;
use crate::storage::traits::{EntryStore, SEARCH_LIMIT};
use crate::storage::types::{
    Entry, EntryFilter, EntryId, JournalMetadata, Mood, MoodCount, NewEntry, TagCount,
};

use row::{format_date, parse_date, EntryRow, ENTRY_COLUMNS};
use validation::{encode_list, fts_tags_text, normalize_tags, validate_new_entry};

/// On-disk format version recorded in the `meta` table.
pub const FORMAT_VERSION: &str = "0.1";

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS meta (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS entries (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        title TEXT NOT NULL,
        body TEXT NOT NULL DEFAULT '',
        tags_json TEXT NOT NULL DEFAULT '[]',
        mood TEXT NOT NULL DEFAULT 'ok'
            CHECK (mood IN ('great', 'good', 'ok', 'rough')),
        focus_hours REAL NOT NULL DEFAULT 0
            CHECK (focus_hours >= 0),
        accomplishments_json TEXT NOT NULL DEFAULT '[]',
        blockers_json TEXT NOT NULL DEFAULT '[]',
        tomorrow_json TEXT NOT NULL DEFAULT '[]',
        created_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS entries_date ON entries (date);

    -- rowid = entries.id
    CREATE VIRTUAL TABLE IF NOT EXISTS entries_fts USING fts5(
        title,
        body,
        tags
    );
"#;

/// File-backed SQLite entry store.
pub struct SqliteStore {
    path: PathBuf,
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Path of the backing database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| JournalError::Storage("SQLite connection poisoned".to_string()))
    }

    fn query_entries<P: rusqlite::Params>(
        conn: &Connection,
        sql: &str,
        params: P,
    ) -> Result<Vec<Entry>> {
        let mut stmt = conn.prepare(sql)?;
        let rows = stmt.query_map(params, EntryRow::from_sql_row)?;

        let mut entries = Vec::new();
        for row in rows {
            entries.push(Entry::try_from(row?)?);
        }
        Ok(entries)
    }

    fn meta_timestamp(conn: &Connection, key: &str) -> Result<DateTime<Utc>> {
        let raw: String = conn.query_row("SELECT value FROM meta WHERE key = ?", [key], |row| {
            row.get(0)
        })?;
        Ok(DateTime::parse_from_rfc3339(&raw)
            .map_err(|e| JournalError::Storage(format!("Invalid {} timestamp: {}", key, e)))?
            .with_timezone(&Utc))
    }
}

fn unavailable(path: &Path, reason: impl ToString) -> JournalError {
    JournalError::StorageUnavailable {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        return Err(JournalError::Validation(format!(
            "Start date {} is after end date {}",
            start, end
        )));
    }
    Ok(())
}

/// Map an error raised while evaluating a MATCH expression.
fn classify_match_error(query: &str, err: rusqlite::Error) -> JournalError {
    match &err {
        rusqlite::Error::SqliteFailure(_, Some(message)) if is_query_syntax_error(message) => {
            JournalError::MalformedQuery(format!("{:?}: {}", query, message))
        }
        _ => err.into(),
    }
}

fn is_query_syntax_error(message: &str) -> bool {
    message.starts_with("fts5:")
        || message.starts_with("no such column")
        || message.contains("syntax error")
        || message.contains("unterminated string")
        || message.contains("unknown special query")
}

impl EntryStore for SqliteStore {
    fn open(config: &StoreConfig) -> Result<Self> {
        let path = config.path();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| unavailable(path, e))?;
            }
        }

        let conn = Connection::open(path).map_err(|e| unavailable(path, e))?;
        let store = Self {
            path: path.to_path_buf(),
            conn: Mutex::new(conn),
        };

        // SQLite opens lazily; permission problems surface on first write.
        store.initialize().map_err(|e| match e {
            JournalError::Sqlite { source } => unavailable(path, source),
            other => other,
        })?;

        debug!("Opened journal store at {}", path.display());
        Ok(store)
    }

    fn initialize(&self) -> Result<()> {
        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute_batch(SCHEMA)?;

        let now = Utc::now().to_rfc3339();
        tx.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('format_version', ?)",
            [FORMAT_VERSION],
        )?;
        tx.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('created_at', ?)",
            [&now],
        )?;
        tx.execute(
            "INSERT OR IGNORE INTO meta (key, value) VALUES ('last_modified', ?)",
            [&now],
        )?;

        tx.commit()?;
        debug!("Schema ready at {}", self.path.display());
        Ok(())
    }

    fn metadata(&self) -> Result<JournalMetadata> {
        let conn = self.lock_conn()?;

        let format_version: String = conn.query_row(
            "SELECT value FROM meta WHERE key = 'format_version'",
            [],
            |row| row.get(0),
        )?;

        Ok(JournalMetadata {
            format_version,
            created_at: Self::meta_timestamp(&conn, "created_at")?,
            last_modified: Self::meta_timestamp(&conn, "last_modified")?,
        })
    }

    fn insert_entry(&mut self, entry: &NewEntry) -> Result<EntryId> {
        validate_new_entry(entry)?;
        let tags = normalize_tags(&entry.tags)?;

        let title = entry.title.trim();
        let tags_json = encode_list(&tags)?;
        let accomplishments_json = encode_list(&entry.accomplishments)?;
        let blockers_json = encode_list(&entry.blockers)?;
        let tomorrow_json = encode_list(&entry.tomorrow)?;
        let created_at = Utc::now().to_rfc3339();

        let mut conn = self.lock_conn()?;
        let tx = conn.transaction()?;

        tx.execute(
            r#"
            INSERT INTO entries (
                date,
                title,
                body,
                tags_json,
                mood,
                focus_hours,
                accomplishments_json,
                blockers_json,
                tomorrow_json,
                created_at
            )
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            params![
                format_date(entry.date),
                title,
                entry.body,
                tags_json,
                entry.mood.as_str(),
                entry.focus_hours,
                accomplishments_json,
                blockers_json,
                tomorrow_json,
                created_at,
            ],
        )?;
        let id = tx.last_insert_rowid();

        tx.execute(
            "INSERT INTO entries_fts (rowid, title, body, tags) VALUES (?, ?, ?, ?)",
            params![id, title, entry.body, fts_tags_text(&tags)],
        )?;

        tx.execute(
            "UPDATE meta SET value = ? WHERE key = 'last_modified'",
            [&created_at],
        )?;

        tx.commit()?;

        debug!("Inserted entry {} for {}", id, entry.date);
        Ok(id)
    }

    fn get_entry(&self, id: EntryId) -> Result<Option<Entry>> {
        let conn = self.lock_conn()?;

        let sql = format!("SELECT {} FROM entries e WHERE e.id = ?", ENTRY_COLUMNS);
        let row = conn
            .query_row(&sql, [id], EntryRow::from_sql_row)
            .optional()?;

        row.map(Entry::try_from).transpose()
    }

    fn entries_on(&self, date: NaiveDate) -> Result<Vec<Entry>> {
        let conn = self.lock_conn()?;
        let sql = format!(
            "SELECT {} FROM entries e WHERE e.date = ? ORDER BY e.id",
            ENTRY_COLUMNS
        );
        Self::query_entries(&conn, &sql, [format_date(date)])
    }

    fn entries_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Entry>> {
        check_range(start, end)?;

        let conn = self.lock_conn()?;
        let sql = format!(
            "SELECT {} FROM entries e WHERE e.date BETWEEN ? AND ? ORDER BY e.date, e.id",
            ENTRY_COLUMNS
        );
        Self::query_entries(&conn, &sql, [format_date(start), format_date(end)])
    }

    fn list_entries(&self, filter: &EntryFilter) -> Result<Vec<Entry>> {
        let mut conditions: Vec<&str> = Vec::new();
        let mut params: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref tag) = filter.tag {
            let normalized = normalize_tags(std::slice::from_ref(tag))?;
            let normalized_tag = normalized
                .into_iter()
                .next()
                .ok_or_else(|| JournalError::Validation("Invalid tag filter".to_string()))?;
            conditions.push("EXISTS (SELECT 1 FROM json_each(e.tags_json) WHERE value = ?)");
            params.push(Box::new(normalized_tag));
        }

        if let Some(mood) = filter.mood {
            conditions.push("e.mood = ?");
            params.push(Box::new(mood.as_str()));
        }

        if let Some(since) = filter.since {
            conditions.push("e.date >= ?");
            params.push(Box::new(format_date(since)));
        }

        if let Some(until) = filter.until {
            conditions.push("e.date <= ?");
            params.push(Box::new(format_date(until)));
        }

        let mut query = format!("SELECT {} FROM entries e", ENTRY_COLUMNS);
        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }
        query.push_str(" ORDER BY e.date DESC, e.id DESC");

        if let Some(limit) = filter.limit {
            query.push_str(" LIMIT ?");
            params.push(Box::new(limit as i64));
        }

        let conn = self.lock_conn()?;
        Self::query_entries(&conn, &query, rusqlite::params_from_iter(params.iter()))
    }

    fn search_entries(&self, query: &str) -> Result<Vec<Entry>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(JournalError::MalformedQuery(
                "search query is empty".to_string(),
            ));
        }

        let conn = self.lock_conn()?;
        let sql = format!(
            r#"
            SELECT {}
            FROM entries_fts f
            JOIN entries e ON e.id = f.rowid
            WHERE entries_fts MATCH ?
            ORDER BY e.date DESC, e.id DESC
            LIMIT ?
            "#,
            ENTRY_COLUMNS
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map(params![query, SEARCH_LIMIT as i64], EntryRow::from_sql_row)
            .map_err(|e| classify_match_error(query, e))?;

        let mut entries = Vec::new();
        for row in rows {
            let row = row.map_err(|e| classify_match_error(query, e))?;
            entries.push(Entry::try_from(row)?);
        }

        debug!("Search {:?} matched {} entries", query, entries.len());
        Ok(entries)
    }

    fn distinct_dates(&self) -> Result<Vec<NaiveDate>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare("SELECT DISTINCT date FROM entries ORDER BY date DESC")?;
        let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut dates = Vec::new();
        for row in rows {
            dates.push(parse_date(&row?)?);
        }
        Ok(dates)
    }

    fn mood_counts(&self, since: NaiveDate, until: NaiveDate) -> Result<Vec<MoodCount>> {
        check_range(since, until)?;

        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            "SELECT mood, COUNT(*) FROM entries WHERE date BETWEEN ? AND ? GROUP BY mood",
        )?;
        let rows = stmt.query_map([format_date(since), format_date(until)], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut counts = Vec::new();
        for row in rows {
            let (raw, count) = row?;
            let mood: Mood = raw
                .parse()
                .map_err(|_| JournalError::Storage(format!("Invalid stored mood {:?}", raw)))?;
            counts.push(MoodCount {
                mood,
                count: count as usize,
            });
        }
        counts.sort_by_key(|c| c.mood);
        Ok(counts)
    }

    fn tag_frequency(&self) -> Result<Vec<TagCount>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT t.value, COUNT(*) AS occurrences
            FROM entries e, json_each(e.tags_json) t
            GROUP BY t.value
            ORDER BY occurrences DESC, t.value ASC
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(TagCount {
                tag: row.get(0)?,
                count: row.get::<_, i64>(1)? as usize,
            })
        })?;

        let mut tags = Vec::new();
        for row in rows {
            tags.push(row?);
        }
        Ok(tags)
    }

    fn entry_count(&self) -> Result<usize> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn check_integrity(&self) -> Result<()> {
        let conn = self.lock_conn()?;

        let fail = |message: &str| {
            warn!("Integrity check failed for {}: {}", self.path.display(), message);
            Err(JournalError::Storage(message.to_string()))
        };

        let quick_check: String = conn.query_row("PRAGMA quick_check", [], |row| row.get(0))?;
        if quick_check != "ok" {
            return fail(&format!("SQLite quick_check failed: {}", quick_check));
        }

        let missing_fts: i64 = conn.query_row(
            "SELECT COUNT(*) FROM entries e WHERE NOT EXISTS (SELECT 1 FROM entries_fts f WHERE f.rowid = e.id)",
            [],
            |row| row.get(0),
        )?;
        if missing_fts > 0 {
            return fail("FTS index missing entries");
        }

        let orphaned_fts: i64 = conn.query_row(
            "SELECT COUNT(*) FROM entries_fts f WHERE NOT EXISTS (SELECT 1 FROM entries e WHERE e.id = f.rowid)",
            [],
            |row| row.get(0),
        )?;
        if orphaned_fts > 0 {
            return fail("FTS index has orphaned rows");
        }

        let stale_fts: i64 = conn.query_row(
            r#"
            SELECT COUNT(*)
            FROM entries e
            JOIN entries_fts f ON f.rowid = e.id
            WHERE f.title != e.title
               OR f.body != e.body
               OR f.tags != (
                   SELECT COALESCE(group_concat(t.value, ' '), '')
                   FROM json_each(e.tags_json) t
               )
            "#,
            [],
            |row| row.get(0),
        )?;
        if stale_fts > 0 {
            return fail("FTS index has stale documents");
        }

        let invalid_mood: i64 = conn.query_row(
            "SELECT COUNT(*) FROM entries WHERE mood NOT IN ('great', 'good', 'ok', 'rough')",
            [],
            |row| row.get(0),
        )?;
        if invalid_mood > 0 {
            return fail("Entries have unknown mood values");
        }

        let metadata_count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM meta WHERE key IN ('format_version', 'created_at', 'last_modified')",
            [],
            |row| row.get(0),
        )?;
        if metadata_count < 3 {
            return fail("Metadata table missing required keys");
        }

        Ok(())
    }
}
