//! Application-level utilities for the devjournal CLI.
//!
//! This module provides:
//! - Path resolution for the config file and the journal store
//! - The per-invocation `AppContext`

mod context;
mod resolver;

pub use context::AppContext;
