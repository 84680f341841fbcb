//! Note domain model.
//!
//! # Responsibility
//! - Define the freeform note record and its lifecycle helpers.
//!
//! # Invariants
//! - `id` is stable and never reused for another note.
//! - `created_at` is set once at creation and never changes.
//! - `updated_at` is set on every title/content edit, absent until the
//!   first edit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Placeholder title given to freshly created notes.
pub const DEFAULT_NOTE_TITLE: &str = "New Note";

/// A freeform note with creation/update timestamps.
///
/// Serialized field names are camelCase (`createdAt`, `updatedAt`) to
/// stay compatible with previously stored collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Opaque unique identifier, generated at creation.
    pub id: String,
    /// Display title, defaults to [`DEFAULT_NOTE_TITLE`] on creation.
    pub title: String,
    /// Free-text body.
    pub content: String,
    /// Set once at creation.
    pub created_at: DateTime<Utc>,
    /// Set on every edit; absent for never-edited notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    /// Creates an empty note with a generated v4 id and the placeholder
    /// title, stamped with the current time.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string(), Utc::now())
    }

    /// Creates an empty note with caller-provided identity and creation
    /// time. Used by tests and import paths.
    pub fn with_id(id: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: DEFAULT_NOTE_TITLE.to_string(),
            content: String::new(),
            created_at,
            updated_at: None,
        }
    }

    /// Returns this note with new title/content and a fresh
    /// `updated_at` stamp. Identity and `created_at` are untouched.
    pub fn edited(&self, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: self.id.clone(),
            title: title.into(),
            content: content.into(),
            created_at: self.created_at,
            updated_at: Some(Utc::now()),
        }
    }
}

impl Default for Note {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{Note, DEFAULT_NOTE_TITLE};

    #[test]
    fn new_note_starts_empty_with_placeholder_title() {
        let note = Note::new();
        assert_eq!(note.title, DEFAULT_NOTE_TITLE);
        assert!(note.content.is_empty());
        assert!(note.updated_at.is_none());
    }

    #[test]
    fn edited_preserves_id_and_created_at() {
        let note = Note::new();
        let edited = note.edited("Groceries", "milk, eggs");
        assert_eq!(edited.id, note.id);
        assert_eq!(edited.created_at, note.created_at);
        assert_eq!(edited.title, "Groceries");
        assert_eq!(edited.content, "milk, eggs");
        assert!(edited.updated_at.is_some());
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let note = Note::new();
        let json = serde_json::to_value(&note).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_none());
        assert!(json.get("created_at").is_none());
    }
}
