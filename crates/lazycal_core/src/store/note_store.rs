//! Note collection with single active-note selection.
//!
//! # Responsibility
//! - CRUD over the note collection, keyed by id.
//! - Track the one currently selected ("active") note for the
//!   presentation layer.
//!
//! # Invariants
//! - At most one note is active at a time; the selection is view state
//!   and is never persisted.
//! - Removing the active note clears the selection; every other
//!   operation leaves it unchanged.
//! - Display order is insertion order as stored; no sort rule applies.

use log::info;

use crate::model::note::Note;
use crate::storage::Storage;

/// Fixed durable-storage key for the note collection.
pub const NOTES_STORAGE_KEY: &str = "calendar-notes";

/// In-memory note collection mirrored to a storage adapter.
pub struct NoteStore<S: Storage> {
    storage: S,
    notes: Vec<Note>,
    active: Option<String>,
}

impl<S: Storage> NoteStore<S> {
    /// Opens the store, loading whatever the adapter has under
    /// [`NOTES_STORAGE_KEY`]; missing or corrupt data yields an empty
    /// collection. No note starts active.
    pub fn open(storage: S) -> Self {
        let notes: Vec<Note> = storage.load(NOTES_STORAGE_KEY, Vec::new());
        info!(
            "event=store_open module=notes status=ok count={}",
            notes.len()
        );
        Self {
            storage,
            notes,
            active: None,
        }
    }

    /// Appends a note with a caller-generated id and mirrors the
    /// collection.
    pub fn add(&mut self, note: Note) {
        self.notes.push(note);
        self.persist();
    }

    /// Creates a fresh empty note, adds it, and makes it active.
    /// Returns a copy of the new record.
    pub fn create(&mut self) -> Note {
        let note = Note::new();
        self.active = Some(note.id.clone());
        self.notes.push(note.clone());
        self.persist();
        note
    }

    /// Replaces the note sharing `note.id` in place. Returns false (and
    /// mutates nothing) when no such id exists.
    pub fn update(&mut self, note: Note) -> bool {
        match self.notes.iter_mut().find(|existing| existing.id == note.id) {
            Some(slot) => {
                *slot = note;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// Removes the note with `id`; clears the active selection when the
    /// removed note was active. Unknown ids are a silent no-op.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id != id);
        let changed = self.notes.len() != before;
        if changed {
            if self.active.as_deref() == Some(id) {
                self.active = None;
            }
            self.persist();
        }
        changed
    }

    /// Sets or clears the active selection. `None` is accepted at any
    /// time (deselection gestures live in the presentation layer).
    pub fn set_active(&mut self, id: Option<&str>) {
        self.active = id.map(str::to_string);
    }

    /// The currently active note, resolved against the live collection.
    /// A stale selection id reads as `None`.
    pub fn active(&self) -> Option<&Note> {
        let id = self.active.as_deref()?;
        self.notes.iter().find(|note| note.id == id)
    }

    /// Id of the active selection, if any.
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Looks up a note by id.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// Every note, in insertion order.
    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn persist(&self) {
        self.storage.save(NOTES_STORAGE_KEY, &self.notes);
    }
}
