//! Parsing helpers for command-line values.

use chrono::NaiveDate;

use devjournal_core::storage::Mood;

use crate::errors::CliError;

/// Split a comma-separated tag list, dropping empty pieces.
///
/// Leading `#` is left for the store to strip.
pub fn split_tags(value: &str) -> Vec<String> {
    split_on(value, ',')
}

/// Split a pipe-separated list (accomplishments, blockers, tomorrow).
pub fn split_list(value: &str) -> Vec<String> {
    split_on(value, '|')
}

fn split_on(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && !piece.chars().all(|c| c == '#'))
        .map(str::to_string)
        .collect()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        CliError::invalid_input(format!("Invalid date (expected YYYY-MM-DD): {}", value)).into()
    })
}

/// Parse a mood name. Errors keep the core validation type.
pub fn parse_mood(value: &str) -> anyhow::Result<Mood> {
    Ok(value.trim().to_lowercase().parse::<Mood>()?)
}

/// Parse a focus-hours value.
pub fn parse_hours(value: &str) -> anyhow::Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        CliError::invalid_input(format!("Invalid hours (expected a number): {}", value)).into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::exit_code_for;

    #[test]
    fn test_split_tags_trims_and_drops_empty() {
        assert_eq!(split_tags("python, #api,,  "), vec!["python", "#api"]);
        assert!(split_tags("").is_empty());
        assert!(split_tags(" , #").is_empty());
    }

    #[test]
    fn test_split_list_keeps_commas() {
        assert_eq!(
            split_list("fixed bug, finally | wrote docs|"),
            vec!["fixed bug, finally", "wrote docs"]
        );
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        let err = parse_date("15/01/2024").unwrap_err();
        assert_eq!(exit_code_for(&err), 4);
    }

    #[test]
    fn test_parse_mood_is_case_insensitive() {
        assert_eq!(parse_mood("Great").unwrap(), Mood::Great);
        assert_eq!(parse_mood(" rough ").unwrap(), Mood::Rough);
    }

    #[test]
    fn test_parse_mood_rejects_unknown() {
        let err = parse_mood("meh").unwrap_err();
        assert!(err.to_string().contains("great, good, ok, rough"));
        assert_eq!(exit_code_for(&err), 4);
    }

    #[test]
    fn test_parse_hours() {
        assert_eq!(parse_hours("2.5").unwrap(), 2.5);
        assert!(parse_hours("two").is_err());
    }
}
