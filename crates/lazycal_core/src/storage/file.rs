//! Filesystem-backed storage adapter.
//!
//! # Responsibility
//! - Persist one JSON document per key inside a data directory.
//! - Degrade every failure path to the trait's no-fail contract.
//!
//! # Invariants
//! - Writes land via a sibling temp file + rename, so a torn write
//!   never corrupts the previously stored document.
//! - Key-to-filename mapping is deterministic; distinct keys used by
//!   this crate map to distinct files.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{Storage, StorageResult};

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Creates an adapter rooted at `dir`. The directory is created
    /// lazily on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this adapter writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        // Keys are fixed short identifiers; anything outside a safe
        // filename alphabet is replaced rather than rejected.
        let safe: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{safe}.json"))
    }

    fn try_load<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&path)?;
        let value = serde_json::from_str(&text)?;
        Ok(Some(value))
    }

    fn try_save<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let text = serde_json::to_string(value)?;
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    fn try_remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

impl Storage for FileStorage {
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => value,
            Ok(None) => default,
            Err(err) => {
                warn!("event=storage_load module=storage status=degraded key={key} error={err}");
                default
            }
        }
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) {
        if let Err(err) = self.try_save(key, value) {
            warn!("event=storage_save module=storage status=degraded key={key} error={err}");
        }
    }

    fn remove(&self, key: &str) {
        if let Err(err) = self.try_remove(key) {
            warn!("event=storage_remove module=storage status=degraded key={key} error={err}");
        }
    }
}
