//! Archive configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::constants::SAVED_MATCHES_KEY;
use crate::core::paths::app_data_root;

/// Where and under which key match history is stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveConfig {
    /// Storage key for the saved match list
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    /// Directory for file-backed storage (platform data dir when unset)
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

fn default_storage_key() -> String {
    SAVED_MATCHES_KEY.to_string()
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            data_dir: None,
        }
    }
}

impl ArchiveConfig {
    /// Load from a JSON file. A missing file gives the defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = match fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(err) => return Err(err),
        };
        serde_json::from_str(&json).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    pub fn save(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(app_data_root)
    }
}
