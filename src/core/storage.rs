//! Key-value storage backends for the match archive.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ArchiveConfig;

/// A durable key-value store holding opaque byte blobs.
pub trait KeyValueStore {
    /// Read the value under `key`, `None` if nothing was ever written.
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>>;

    /// Replace the value under `key`.
    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()>;
}

/// In-memory store, for tests and hosts that persist elsewhere.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed raw bytes under a key, bypassing any encoding.
    pub fn insert_raw(&mut self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), bytes.into());
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        self.entries.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// Stores each key as `<root>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Store rooted at the configured (or platform default) data directory.
    pub fn from_config(config: &ArchiveConfig) -> Self {
        Self::new(config.resolved_data_dir())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn temp_entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json.tmp", key))
    }
}

impl KeyValueStore for FileStore {
    fn read(&self, key: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.entry_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write(&mut self, key: &str, bytes: &[u8]) -> io::Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.entry_path(key);
        let tmp_path = self.temp_entry_path(key);
        fs::write(&tmp_path, bytes)?;
        // `rename` swaps the new file in atomically.
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }
}
