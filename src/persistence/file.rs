// SPDX-License-Identifier: GPL-3.0-only

//! JSON file backend

use super::{DurableRecord, StateBackend};
use crate::constants::{APP_FOLDER, STORAGE_FILE_NAME, STORAGE_KEY};
use crate::errors::StorageError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Stores the durable record as a single JSON file
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous record intact.
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    path: PathBuf,
    quota_bytes: Option<usize>,
}

impl JsonFileBackend {
    /// Backend writing `polaroid-storage.json` inside `dir`
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_FILE_NAME),
            quota_bytes: None,
        }
    }

    /// Refuse records larger than `bytes` once serialized
    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }
}

/// Default storage directory (`~/.local/share/polaroid-booth` on Linux)
pub fn default_storage_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
        .join(APP_FOLDER)
}

impl StateBackend for JsonFileBackend {
    fn load(&self) -> Result<Option<DurableRecord>, StorageError> {
        let json = match std::fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored record");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };

        let record = DurableRecord::from_json(&json)?;
        info!(
            key = STORAGE_KEY,
            path = %self.path.display(),
            photos = record.photos.len(),
            "Loaded stored record"
        );
        Ok(Some(record))
    }

    fn save(&self, record: &DurableRecord) -> Result<(), StorageError> {
        let json = record.to_json()?;
        if let Some(quota) = self.quota_bytes
            && json.len() > quota
        {
            return Err(StorageError::QuotaExceeded);
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        std::fs::write(&temp, json.as_bytes())?;
        std::fs::rename(&temp, &self.path)?;

        debug!(
            path = %self.path.display(),
            bytes = json.len(),
            "Record written"
        );
        Ok(())
    }
}
