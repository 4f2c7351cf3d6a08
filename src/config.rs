use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::PROFILES_KEY;
use data_error::Result;
use fs_storage::{FileStorage, STORAGE_FOLDER};

/// Where and under which key the profile collection is persisted
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct StoreConfig {
    pub root: PathBuf,
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(STORAGE_FOLDER),
            storage_key: PROFILES_KEY.to_owned(),
        }
    }
}

impl StoreConfig {
    /// Read a JSON config file; absent fields keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        log::debug!("Loaded store config from {}", path.display());
        Ok(config)
    }

    pub fn file_storage(&self) -> FileStorage {
        FileStorage::new(self.storage_key.clone(), &self.root)
    }
}
