//! JSON output formatting for entries.

use devjournal_core::storage::Entry;

/// Convert an entry to JSON for output.
pub fn entry_json(entry: &Entry) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entry)?)
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[Entry]) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::Value::Array(
        entries.iter().map(entry_json).collect::<anyhow::Result<_>>()?,
    ))
}

/// Print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
