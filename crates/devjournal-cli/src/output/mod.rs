//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying entries
//! as terminal text, JSON, and Markdown exports.

mod json;
mod markdown;
mod text;

// Re-export public API
pub use json::{entries_json, entry_json, print_json};
pub use markdown::{export_file_name, render_export};
pub use text::{render_entry, EntryView};
