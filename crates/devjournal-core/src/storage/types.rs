//! Core data types for the storage layer.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::JournalError;

/// Identifier assigned to an entry at insertion.
pub type EntryId = i64;

/// How the day went.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Great,
    Good,
    #[default]
    Ok,
    Rough,
}

impl Mood {
    /// Every mood, best first.
    pub const ALL: [Mood; 4] = [Mood::Great, Mood::Good, Mood::Ok, Mood::Rough];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Great => "great",
            Mood::Good => "good",
            Mood::Ok => "ok",
            Mood::Rough => "rough",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = JournalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Mood::ALL
            .into_iter()
            .find(|mood| mood.as_str() == value)
            .ok_or_else(|| {
                JournalError::Validation(format!(
                    "mood must be one of: great, good, ok, rough (got \"{}\")",
                    value
                ))
            })
    }
}

/// A stored journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,

    /// Logical day the entry belongs to
    pub date: NaiveDate,

    pub title: String,
    pub body: String,

    /// Tags in insertion order (duplicates kept)
    pub tags: Vec<String>,

    pub mood: Mood,
    pub focus_hours: f64,
    pub accomplishments: Vec<String>,
    pub blockers: Vec<String>,

    /// Plans for the next day
    pub tomorrow: Vec<String>,

    /// Audit timestamp; never used for date-based queries
    pub created_at: DateTime<Utc>,
}

/// Builder for creating new entries.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub date: NaiveDate,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub mood: Mood,
    pub focus_hours: f64,
    pub accomplishments: Vec<String>,
    pub blockers: Vec<String>,
    pub tomorrow: Vec<String>,
}

impl NewEntry {
    pub fn new(date: NaiveDate, title: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            body: String::new(),
            tags: Vec::new(),
            mood: Mood::default(),
            focus_hours: 0.0,
            accomplishments: Vec::new(),
            blockers: Vec::new(),
            tomorrow: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    pub fn with_focus_hours(mut self, hours: f64) -> Self {
        self.focus_hours = hours;
        self
    }

    pub fn with_accomplishments(mut self, items: Vec<String>) -> Self {
        self.accomplishments = items;
        self
    }

    pub fn with_blockers(mut self, items: Vec<String>) -> Self {
        self.blockers = items;
        self
    }

    pub fn with_tomorrow(mut self, items: Vec<String>) -> Self {
        self.tomorrow = items;
        self
    }
}

/// Filter for listing recent entries.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    /// Only entries carrying this tag
    pub tag: Option<String>,

    /// Only entries with this mood
    pub mood: Option<Mood>,

    /// Start date (inclusive)
    pub since: Option<NaiveDate>,

    /// End date (inclusive)
    pub until: Option<NaiveDate>,

    /// Maximum number of results
    pub limit: Option<usize>,
}

impl EntryFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn since(mut self, date: NaiveDate) -> Self {
        self.since = Some(date);
        self
    }

    pub fn until(mut self, date: NaiveDate) -> Self {
        self.until = Some(date);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Number of entries recorded with a given mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

/// Number of times a tag occurs across all entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

/// Metadata for a journal store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalMetadata {
    /// Format version (e.g., "0.1")
    pub format_version: String,

    /// When this store was first initialized
    pub created_at: DateTime<Utc>,

    /// Last successful insert (informational)
    pub last_modified: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mood_parse_round_trip() {
        for mood in Mood::ALL {
            assert_eq!(mood.as_str().parse::<Mood>().unwrap(), mood);
        }
    }

    #[test]
    fn test_mood_rejects_unknown_value() {
        let err = "meh".parse::<Mood>().unwrap_err();
        assert!(matches!(err, JournalError::Validation(_)));
    }

    #[test]
    fn test_mood_is_case_sensitive() {
        assert!("Great".parse::<Mood>().is_err());
    }

    #[test]
    fn test_mood_defaults_to_ok() {
        assert_eq!(Mood::default(), Mood::Ok);
    }

    #[test]
    fn test_mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Rough).unwrap(), "\"rough\"");
    }

    #[test]
    fn test_new_entry_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let entry = NewEntry::new(date, "Shipped OAuth")
            .with_body("finally")
            .with_tags(vec!["auth".to_string()])
            .with_mood(Mood::Great)
            .with_focus_hours(5.5)
            .with_accomplishments(vec!["login".to_string()])
            .with_blockers(vec!["flaky CI".to_string()])
            .with_tomorrow(vec!["docs".to_string()]);

        assert_eq!(entry.date, date);
        assert_eq!(entry.title, "Shipped OAuth");
        assert_eq!(entry.mood, Mood::Great);
        assert_eq!(entry.focus_hours, 5.5);
        assert_eq!(entry.tags, vec!["auth"]);
        assert_eq!(entry.blockers, vec!["flaky CI"]);
    }

    #[test]
    fn test_new_entry_defaults() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        let entry = NewEntry::new(date, "t");
        assert_eq!(entry.mood, Mood::Ok);
        assert_eq!(entry.focus_hours, 0.0);
        assert!(entry.body.is_empty());
        assert!(entry.tomorrow.is_empty());
    }

    #[test]
    fn test_entry_filter_builder() {
        let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let filter = EntryFilter::new()
            .tag("rust")
            .mood(Mood::Good)
            .since(since)
            .limit(10);

        assert_eq!(filter.tag, Some("rust".to_string()));
        assert_eq!(filter.mood, Some(Mood::Good));
        assert_eq!(filter.since, Some(since));
        assert_eq!(filter.until, None);
        assert_eq!(filter.limit, Some(10));
    }
}
