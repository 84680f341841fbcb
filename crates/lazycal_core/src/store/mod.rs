//! Write-through record stores.
//!
//! # Responsibility
//! - Own the in-memory Event and Note collections and their mutation
//!   surface.
//! - Mirror every mutation to the persistence adapter so state
//!   survives a reload.
//!
//! # Invariants
//! - Ids are unique within each collection; lookups are keyed by id.
//! - A failed mirror write never rolls back the in-memory mutation.

pub mod event_store;
pub mod note_store;
