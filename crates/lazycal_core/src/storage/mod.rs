//! Durable key-value persistence boundary.
//!
//! # Responsibility
//! - Define the load/save/remove contract stores persist through.
//! - Keep serialization and I/O details out of store code.
//!
//! # Invariants
//! - The public adapter surface never fails: `load` degrades to the
//!   caller's default on missing/corrupt/unreadable data, `save` and
//!   `remove` swallow failures. In-memory state stays authoritative for
//!   the session when a write is lost.
//! - No schema migration or versioning: a shape mismatch reads as
//!   corruption and degrades to the default.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde::de::DeserializeOwned;
use serde::Serialize;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a storage backend's fallible internals.
///
/// These never cross the [`Storage`] trait boundary; implementations
/// log them at `warn` and degrade.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Serde(serde_json::Error),
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Serde(err) => write!(f, "{err}"),
            Self::Unavailable(message) => write!(f, "storage backend unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serde(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde(value)
    }
}

/// Key-value persistence contract used by the stores.
///
/// Values must be JSON-compatible shapes. One adapter instance serves
/// one or more fixed, distinct keys; concurrent writers to the same key
/// are unguarded and last-write-wins at full-document granularity.
pub trait Storage {
    /// Returns the value stored under `key`, or `default` when the key
    /// is absent, the content is unparseable, or the backend is
    /// unavailable. Never fails.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T;

    /// Serializes `value` and writes it under `key`. Failures are
    /// swallowed after logging; the caller's in-memory state remains
    /// authoritative.
    fn save<T: Serialize>(&self, key: &str, value: &T);

    /// Deletes the value stored under `key`, if any. Failures are
    /// swallowed after logging.
    fn remove(&self, key: &str);
}

impl<S: Storage> Storage for &S {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        (**self).load(key, default)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) {
        (**self).save(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}
