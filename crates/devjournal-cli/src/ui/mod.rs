//! UI primitives for the devjournal CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, mood icons, owo-colors styles
//! - **Render**: Tables, headers, bars, hints, error lines
//! - **Format**: String utilities (truncate, hours)

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, bar, blank_line, header, kv, print, simple_table, Column};
