// SPDX-License-Identifier: GPL-3.0-only

use crate::constants::{APP_FOLDER, CONFIG_FILE_NAME, timing};
use crate::errors::{AppError, AppResult, StorageError};
use crate::persistence::file::default_storage_dir;
use crate::persistence::{JsonFileBackend, StateBackend, WriteBehind};
use crate::pipelines::photo::{EncodingQuality, PostProcessingConfig, StillPipeline};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Booth configuration
///
/// Read from `<config dir>/polaroid-booth/config.json`. Missing keys take
/// their defaults, so an empty object is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mirror the live preview horizontally (selfie mode); stills follow it
    pub mirror_preview: bool,
    /// Length of the "printing" pause before a photo lands on the canvas
    pub print_delay_ms: u64,
    /// JPEG quality preset for stills
    pub jpeg_quality: EncodingQuality,
    /// Directory for the durable record (platform data dir when unset)
    pub storage_dir: Option<PathBuf>,
    /// Write the durable record on a background thread
    pub write_behind: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mirror_preview: true, // Default to mirrored (selfie mode)
            print_delay_ms: timing::PRINT_DELAY_MS,
            jpeg_quality: EncodingQuality::default(),
            storage_dir: None,
            write_behind: true,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_FOLDER).join(CONFIG_FILE_NAME))
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            debug!("No config directory, using defaults");
            return Self::default();
        };
        match Self::load_from(&path) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Ignoring unreadable config");
                Self::default()
            }
        }
    }

    /// Load from `path`; `Ok(None)` when the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Option<Self>> {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let json =
            serde_json::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn storage_dir(&self) -> PathBuf {
        self.storage_dir.clone().unwrap_or_else(default_storage_dir)
    }

    pub fn print_delay(&self) -> Duration {
        Duration::from_millis(self.print_delay_ms)
    }

    /// Still pipeline matching the preview and quality settings
    pub fn still_pipeline(&self) -> StillPipeline {
        StillPipeline::new(
            PostProcessingConfig {
                mirror: self.mirror_preview,
                ..Default::default()
            },
            self.jpeg_quality,
        )
    }

    /// Durable storage backend for the photo store
    pub fn open_backend(&self) -> Result<Box<dyn StateBackend>, StorageError> {
        let backend = JsonFileBackend::new(self.storage_dir());
        debug!(path = %backend.path().display(), write_behind = self.write_behind, "Opening storage");
        if self.write_behind {
            Ok(Box::new(WriteBehind::spawn(backend)?))
        } else {
            Ok(Box::new(backend))
        }
    }
}
