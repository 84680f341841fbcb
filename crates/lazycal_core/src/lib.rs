//! Core domain logic for LazyCal, an offline calendar with per-day
//! events and freeform notes.
//!
//! The crate covers the month grid, the two write-through record
//! stores, and the key-value persistence boundary. Rendering, dialogs
//! and input handling belong to an external presentation layer that
//! calls into these APIs.

pub mod calendar;
pub mod logging;
pub mod model;
pub mod prefs;
pub mod storage;
pub mod store;

pub use calendar::{month_grid, next_month, prev_month, CalendarView, GridDay};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::Event;
pub use model::note::{Note, DEFAULT_NOTE_TITLE};
pub use prefs::{help_prompt_dismissed, set_help_prompt_dismissed, HELP_PROMPT_KEY};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use store::event_store::{sort_events, EventStore, EVENTS_STORAGE_KEY};
pub use store::note_store::{NoteStore, NOTES_STORAGE_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
