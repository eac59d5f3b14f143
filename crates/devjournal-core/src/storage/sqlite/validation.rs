//! Entry validation and list encoding.

use crate::error::{JournalError, Result};
use crate::storage::types::NewEntry;

/// Maximum bytes per tag.
pub const MAX_TAG_BYTES: usize = 128;

/// Maximum tags per entry.
pub const MAX_TAGS_PER_ENTRY: usize = 100;

/// Maximum bytes for an entry title.
pub const MAX_TITLE_BYTES: usize = 512;

/// Normalize and validate tags.
///
/// - Trims whitespace and strips leading `#` characters
/// - Keeps insertion order and duplicates
/// - Rejects empty tags and enforces length limits
pub fn normalize_tags(tags: &[String]) -> Result<Vec<String>> {
    if tags.len() > MAX_TAGS_PER_ENTRY {
        return Err(JournalError::Validation(format!(
            "Too many tags (max {})",
            MAX_TAGS_PER_ENTRY
        )));
    }

    let mut normalized = Vec::with_capacity(tags.len());
    for tag in tags {
        let cleaned = tag.trim().trim_start_matches('#').trim();
        if cleaned.is_empty() {
            return Err(JournalError::Validation(
                "Empty tag is not allowed".to_string(),
            ));
        }
        if cleaned.len() > MAX_TAG_BYTES {
            return Err(JournalError::Validation(format!(
                "Tag too long (max {} bytes)",
                MAX_TAG_BYTES
            )));
        }
        normalized.push(cleaned.to_string());
    }

    Ok(normalized)
}

/// Validate the scalar fields of a new entry.
pub fn validate_new_entry(entry: &NewEntry) -> Result<()> {
    let title = entry.title.trim();
    if title.is_empty() {
        return Err(JournalError::Validation("Title cannot be empty".to_string()));
    }
    if title.len() > MAX_TITLE_BYTES {
        return Err(JournalError::Validation(format!(
            "Title too long (max {} bytes)",
            MAX_TITLE_BYTES
        )));
    }
    if !entry.focus_hours.is_finite() || entry.focus_hours < 0.0 {
        return Err(JournalError::Validation(format!(
            "Focus hours must be a non-negative number (got {})",
            entry.focus_hours
        )));
    }
    Ok(())
}

/// Encode an ordered list as a JSON array.
pub fn encode_list(items: &[String]) -> Result<String> {
    Ok(serde_json::to_string(items)?)
}

/// Decode a JSON array written by [`encode_list`].
pub fn decode_list(column: &str, raw: &str) -> Result<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| JournalError::Storage(format!("Invalid {} JSON: {}", column, e)))
}

/// Text indexed for the tag column of the search index.
pub fn fts_tags_text(tags: &[String]) -> String {
    tags.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_normalize_tags_strips_hash_and_whitespace() {
        let normalized = normalize_tags(&tags(&[" #rust", "##api ", "devops"])).unwrap();
        assert_eq!(normalized, tags(&["rust", "api", "devops"]));
    }

    #[test]
    fn test_normalize_tags_keeps_order_and_duplicates() {
        let normalized = normalize_tags(&tags(&["b", "a", "b"])).unwrap();
        assert_eq!(normalized, tags(&["b", "a", "b"]));
    }

    #[test]
    fn test_normalize_tags_rejects_empty() {
        assert!(normalize_tags(&tags(&["ok", "  "])).is_err());
        assert!(normalize_tags(&tags(&["#"])).is_err());
    }

    #[test]
    fn test_normalize_tags_rejects_too_long() {
        let long = "x".repeat(MAX_TAG_BYTES + 1);
        assert!(normalize_tags(&[long]).is_err());
    }

    #[test]
    fn test_normalize_tags_rejects_too_many() {
        let many: Vec<String> = (0..=MAX_TAGS_PER_ENTRY).map(|i| i.to_string()).collect();
        assert!(normalize_tags(&many).is_err());
    }

    #[test]
    fn test_validate_new_entry() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(validate_new_entry(&NewEntry::new(date, "ok")).is_ok());
        assert!(validate_new_entry(&NewEntry::new(date, "   ")).is_err());
        assert!(validate_new_entry(&NewEntry::new(date, "t").with_focus_hours(-1.0)).is_err());
        assert!(validate_new_entry(&NewEntry::new(date, "t").with_focus_hours(f64::NAN)).is_err());
        assert!(
            validate_new_entry(&NewEntry::new(date, "t").with_focus_hours(f64::INFINITY)).is_err()
        );
    }

    #[test]
    fn test_list_encoding_preserves_order_and_separators() {
        let items = tags(&["z, with comma", "a | pipe", "\"quoted\"", "z, with comma"]);
        let encoded = encode_list(&items).unwrap();
        assert_eq!(decode_list("tags_json", &encoded).unwrap(), items);
    }

    #[test]
    fn test_decode_list_rejects_garbage() {
        let err = decode_list("blockers_json", "not json").unwrap_err();
        assert!(err.to_string().contains("blockers_json"));
    }

    #[test]
    fn test_fts_tags_text() {
        assert_eq!(fts_tags_text(&tags(&["python", "api"])), "python api");
        assert_eq!(fts_tags_text(&[]), "");
    }
}
