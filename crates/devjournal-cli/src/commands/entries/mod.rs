//! Commands that write or read individual entries.

mod add;
mod export;
mod list;
mod search;
mod show;
mod today;

pub use add::handle_add;
pub use export::handle_export;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;
pub use today::handle_today;
