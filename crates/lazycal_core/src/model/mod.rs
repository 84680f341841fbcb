//! Domain records for the calendar core.
//!
//! # Responsibility
//! - Define the canonical Event and Note shapes shared by stores and
//!   the presentation layer.
//! - Keep serialized field names aligned with the stored JSON schema.
//!
//! # Invariants
//! - Every record is identified by an opaque string `id`, unique within
//!   its collection and immutable after creation.
//! - Record types carry no storage or ordering logic of their own.

pub mod event;
pub mod note;
