//! Statistics derived from store queries.
//!
//! Nothing here touches the database: each function consumes the output of
//! an [`EntryStore`](crate::storage::EntryStore) query.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::error::{JournalError, Result};
use crate::storage::types::{Entry, Mood, MoodCount};

/// Default trailing window for mood trends, in days.
pub const DEFAULT_MOOD_WINDOW_DAYS: u32 = 30;

/// Length of the run of consecutive days that starts at the most recent date.
///
/// `dates` must be distinct and sorted most recent first, as returned by
/// `EntryStore::distinct_dates`. The run does not have to include today.
pub fn current_streak(dates: &[NaiveDate]) -> u32 {
    if dates.is_empty() {
        return 0;
    }

    let mut streak = 1;
    for pair in dates.windows(2) {
        if pair[0] - pair[1] == Duration::days(1) {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Monday of the week containing `today`.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    today - Duration::days(i64::from(today.weekday().num_days_from_monday()))
}

/// Inclusive `(since, until)` bounds of a trailing window ending at `today`.
///
/// A window reaching past the earliest representable date is a
/// [`JournalError::Validation`].
pub fn mood_window(today: NaiveDate, days: u32) -> Result<(NaiveDate, NaiveDate)> {
    let since = today
        .checked_sub_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| {
            JournalError::Validation(format!("window of {} days is out of range", days))
        })?;
    Ok((since, today))
}

/// Roll-up of one week of entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub entry_count: usize,
    pub focus_hours: f64,
    /// Accomplishments of every entry, in date order
    pub accomplishments: Vec<String>,
}

impl WeeklySummary {
    /// Summarize `entries`, which must already be sorted by date.
    pub fn from_entries(start: NaiveDate, end: NaiveDate, entries: &[Entry]) -> Self {
        Self {
            start,
            end,
            entry_count: entries.len(),
            focus_hours: entries.iter().map(|e| e.focus_hours).sum(),
            accomplishments: entries
                .iter()
                .flat_map(|e| e.accomplishments.iter().cloned())
                .collect(),
        }
    }
}

/// One row of a mood distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    /// Share of the window, 0-100
    pub percent: f64,
}

impl MoodShare {
    /// Bar length: one block per five percent.
    pub fn bar_width(&self) -> usize {
        (self.percent / 5.0) as usize
    }
}

/// Mood counts turned into percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoodDistribution {
    pub total: usize,
    pub shares: Vec<MoodShare>,
}

impl MoodDistribution {
    pub fn from_counts(counts: &[MoodCount]) -> Self {
        let total: usize = counts.iter().map(|c| c.count).sum();
        let mut shares: Vec<MoodShare> = counts
            .iter()
            .filter(|c| c.count > 0)
            .map(|c| MoodShare {
                mood: c.mood,
                count: c.count,
                percent: c.count as f64 / total as f64 * 100.0,
            })
            .collect();
        shares.sort_by_key(|s| s.mood);
        Self { total, shares }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
