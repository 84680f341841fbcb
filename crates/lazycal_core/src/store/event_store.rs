//! Event collection with date filtering and sort ordering.
//!
//! # Responsibility
//! - CRUD over the event collection, keyed by id.
//! - Answer per-day queries the grid renders from (`has_event_on_date`).
//!
//! # Invariants
//! - `edit` is an atomic in-place replace: exactly one record with the
//!   edited id exists before and after, and the collection mutates
//!   once — never an observable remove-then-add.
//! - Removing or editing an unknown id is a silent no-op.
//! - The store does not validate titles; callers discard empty-title
//!   submissions before reaching it.

use std::cmp::Ordering;

use chrono::NaiveDate;
use log::info;

use crate::model::event::Event;
use crate::storage::Storage;

/// Fixed durable-storage key for the event collection.
pub const EVENTS_STORAGE_KEY: &str = "calendar-events";

/// In-memory event collection mirrored to a storage adapter.
///
/// Backed by an ordered `Vec` so the persisted JSON array keeps a
/// stable order across save/load; id lookups scan linearly, which is
/// fine at this collection size.
pub struct EventStore<S: Storage> {
    storage: S,
    events: Vec<Event>,
}

impl<S: Storage> EventStore<S> {
    /// Opens the store, loading whatever the adapter has under
    /// [`EVENTS_STORAGE_KEY`]; missing or corrupt data yields an empty
    /// collection.
    pub fn open(storage: S) -> Self {
        let events: Vec<Event> = storage.load(EVENTS_STORAGE_KEY, Vec::new());
        info!(
            "event=store_open module=events status=ok count={}",
            events.len()
        );
        Self { storage, events }
    }

    /// Appends a fully-formed event and mirrors the collection.
    ///
    /// No duplicate-id check is performed; the caller supplies a
    /// globally unique id.
    pub fn add(&mut self, event: Event) {
        self.events.push(event);
        self.persist();
    }

    /// Removes the event with `id`. Returns whether anything changed;
    /// an unknown id is a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let changed = self.events.len() != before;
        if changed {
            self.persist();
        }
        changed
    }

    /// Replaces the record sharing `event.id` in place, keeping its
    /// position. Returns false (and mutates nothing) when no such id
    /// exists.
    pub fn edit(&mut self, event: Event) -> bool {
        match self.events.iter_mut().find(|existing| existing.id == event.id) {
            Some(slot) => {
                *slot = event;
                self.persist();
                true
            }
            None => false,
        }
    }

    /// All events whose `date` equals the given day. Order is
    /// unspecified until sorted.
    pub fn list_for_date(&self, date: NaiveDate) -> Vec<Event> {
        self.events
            .iter()
            .filter(|event| event.date == date)
            .cloned()
            .collect()
    }

    /// Every event in the collection.
    pub fn list_all(&self) -> &[Event] {
        &self.events
    }

    /// True iff at least one event falls on the given day. Drives the
    /// per-day indicator dot in the grid.
    pub fn has_event_on_date(&self, date: NaiveDate) -> bool {
        self.events.iter().any(|event| event.date == date)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn persist(&self) {
        self.storage.save(EVENTS_STORAGE_KEY, &self.events);
    }
}

/// Sorts events by date ascending, then by time ascending when both
/// records carry a time.
///
/// The comparator reports `Equal` when either side lacks a time, so the
/// stable sort keeps timeless events in their input order relative to
/// their date peers.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| match a.date.cmp(&b.date) {
        Ordering::Equal => match (&a.time, &b.time) {
            (Some(a_time), Some(b_time)) => a_time.cmp(b_time),
            _ => Ordering::Equal,
        },
        order => order,
    });
}
