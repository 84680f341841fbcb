//! In-memory storage fake for tests and storage-less environments.
//!
//! # Responsibility
//! - Mirror the durable adapter contract without touching the
//!   filesystem.
//! - Simulate an unavailable backend so degradation paths can be
//!   asserted.
//!
//! # Invariants
//! - With failure switches off, a saved value loads back unchanged.
//! - With a switch on, the affected operation behaves exactly like the
//!   degraded path of a real backend: `load` yields the default,
//!   `save`/`remove` are lost silently.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Storage, StorageError};

fn simulated_outage() -> StorageError {
    StorageError::Unavailable("simulated outage".to_string())
}

/// Map-backed adapter holding serialized JSON text per key.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `load` degrade to its default.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Makes every subsequent `save`/`remove` a silent loss.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Raw stored text under `key`, for assertions on the wire shape.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Seeds raw text under `key`, bypassing serialization. Lets tests
    /// plant malformed content.
    pub fn insert_raw(&self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.borrow_mut().insert(key.into(), text.into());
    }
}

impl Storage for MemoryStorage {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        if self.fail_reads.get() {
            let err = simulated_outage();
            warn!("event=storage_load module=storage status=degraded key={key} error={err}");
            return default;
        }
        match self.entries.borrow().get(key) {
            Some(text) => match serde_json::from_str(text) {
                Ok(value) => value,
                Err(err) => {
                    warn!(
                        "event=storage_load module=storage status=degraded key={key} error={err}"
                    );
                    default
                }
            },
            None => default,
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) {
        if self.fail_writes.get() {
            let err = simulated_outage();
            warn!("event=storage_save module=storage status=degraded key={key} error={err}");
            return;
        }
        match serde_json::to_string(value) {
            Ok(text) => {
                self.entries.borrow_mut().insert(key.to_string(), text);
            }
            Err(err) => {
                warn!("event=storage_save module=storage status=degraded key={key} error={err}");
            }
        }
    }

    fn remove(&self, key: &str) {
        if self.fail_writes.get() {
            let err = simulated_outage();
            warn!("event=storage_remove module=storage status=degraded key={key} error={err}");
            return;
        }
        self.entries.borrow_mut().remove(key);
    }
}
