//! Event domain model.
//!
//! # Responsibility
//! - Define the calendar event record and its creation helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another event.
//! - `date` pins the event to exactly one day cell; day membership is
//!   decided by date equality, never by range logic.
//! - `time` is an optional `HH:MM` display string; `None` means
//!   all-day/unspecified. The store performs no validation on it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single calendar event, pinned to one day.
///
/// `title` is expected to be non-empty; enforcing that is the creating
/// caller's job, not the record's or the store's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Opaque unique identifier, generated at creation.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Calendar day this event belongs to. Serializes as `YYYY-MM-DD`.
    pub date: NaiveDate,
    /// Optional `HH:MM` string. Lexicographic order on it is
    /// chronological, which the sort rule relies on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Optional free-text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present in the stored schema; no core operation toggles it yet.
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    /// Creates an event with a generated v4 id and no time/description.
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), title, date)
    }

    /// Creates an event with a caller-provided id.
    ///
    /// Used when identity already exists externally, e.g. when the
    /// presentation layer rebuilds an edited record.
    pub fn with_id(id: impl Into<String>, title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            date,
            time: None,
            description: None,
            completed: false,
        }
    }
}
