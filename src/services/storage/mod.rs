//! Durable key/value storage.
//!
//! The event store persists a single serialized blob under a fixed key. The
//! [`KeyValueStorage`] trait is the seam between the store and the medium:
//! [`FileStorage`] keeps one JSON file per key inside a directory, and
//! [`MemoryStorage`] keeps everything in a map for tests and throwaway sessions.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// String key/value storage with whole-value reads and writes.
pub trait KeyValueStorage {
    /// Returns `None` when nothing has been stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Stores each key as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`.
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            bail!("invalid storage key {:?}", key);
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }

        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Ok(Some(data))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create dir {}", self.dir.display()))?;
        fs::write(&path, value).with_context(|| format!("failed to write {}", path.display()))?;
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with one entry.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self { entries }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
