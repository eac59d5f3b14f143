//! Commands that summarize the journal.

mod mood;
mod streak;
mod tags;
mod weekly;

pub use mood::handle_mood_trend;
pub use streak::handle_streak;
pub use tags::handle_tag_cloud;
pub use weekly::handle_weekly;
