// SPDX-License-Identifier: GPL-3.0-only

//! The booth: capture side and canvas side around the photo store
//!
//! The booth is what the UI talks to. Taking a photo runs the still pipeline,
//! builds the new entity (fresh id, random scatter, the *current* card color)
//! and, after the printing pause, adds it to the store. Canvas interactions
//! are forwarded to the store as single mutations.

pub mod placement;

pub use placement::Placement;

use crate::config::Config;
use crate::constants::CAPTION_MAX_CHARS;
use crate::errors::{AppError, AppResult, CaptureError};
use crate::pipelines::photo::{CameraFrame, EncodedStill, StillPipeline, decode_data_url};
use crate::store::{
    ImageData, NewPhoto, PhotoId, PhotoPatch, PhotoStore, SettingsPatch, StoreCommand,
};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};
use uuid::Uuid;

/// Limit a caption to [`CAPTION_MAX_CHARS`] characters
pub fn clamp_caption(text: &str) -> String {
    text.chars().take(CAPTION_MAX_CHARS).collect()
}

pub struct Booth<R: Rng = StdRng> {
    store: PhotoStore,
    pipeline: StillPipeline,
    rng: R,
    print_delay: Duration,
}

impl Booth<StdRng> {
    pub fn new(store: PhotoStore, config: &Config) -> Self {
        Self::with_rng(store, config, StdRng::from_os_rng())
    }
}

impl<R: Rng> Booth<R> {
    /// Booth drawing placements from `rng` (seed it for reproducible layouts)
    pub fn with_rng(store: PhotoStore, config: &Config, rng: R) -> Self {
        Self {
            store,
            pipeline: config.still_pipeline(),
            rng,
            print_delay: config.print_delay(),
        }
    }

    pub fn store(&self) -> &PhotoStore {
        &self.store
    }

    /// Build the creation input for a finished still
    pub fn prepare_photo(&mut self, still: &EncodedStill) -> NewPhoto {
        let placement = Placement::random(&mut self.rng);
        NewPhoto {
            id: Uuid::new_v4(),
            image_data: ImageData::from(still.to_data_url()),
            x: placement.position.x,
            y: placement.position.y,
            rotation: placement.rotation,
            caption: String::new(),
            created_at: Utc::now(),
            background_color: self
                .store
                .snapshot()
                .settings()
                .default_background_color
                .clone(),
        }
    }

    /// Take a photo from `frame` and print it onto the canvas
    ///
    /// The store is untouched until the printing pause is over; a failed
    /// capture never creates an entity.
    pub async fn snap(&mut self, frame: Arc<CameraFrame>) -> Result<PhotoId, CaptureError> {
        info!("Capturing photo...");
        let still = self.pipeline.process(frame).await?;
        let photo = self.prepare_photo(&still);
        let id = photo.id;

        if !self.print_delay.is_zero() {
            debug!(delay_ms = self.print_delay.as_millis() as u64, "Printing");
            tokio::time::sleep(self.print_delay).await;
        }

        self.store.add_photo(photo);
        info!(%id, "Photo printed");
        Ok(id)
    }

    /// Commit an edited caption (Enter or blur)
    pub fn commit_caption(&mut self, id: PhotoId, text: &str) -> bool {
        self.store.update_photo(id, PhotoPatch::caption(clamp_caption(text)))
    }

    /// Drag end
    pub fn move_photo(&mut self, id: PhotoId, x: f64, y: f64) -> bool {
        self.store.update_photo(id, PhotoPatch::position(x, y))
    }

    pub fn recolor_photo(&mut self, id: PhotoId, color: &str) -> bool {
        self.store.update_photo(id, PhotoPatch::background_color(color))
    }

    /// Pointer down on a polaroid
    pub fn bring_to_front(&mut self, id: PhotoId) -> bool {
        self.store.bring_to_front(id)
    }

    pub fn delete_photo(&mut self, id: PhotoId) -> bool {
        self.store.remove_photo(id)
    }

    pub fn clear_all(&mut self) {
        self.store.clear_all_photos();
    }

    /// Card color for photos taken from now on
    pub fn set_default_color(&mut self, color: &str) -> bool {
        self.store
            .update_settings(SettingsPatch::default_background_color(color))
    }

    pub fn apply(&mut self, command: StoreCommand) -> bool {
        self.store.apply(command)
    }

    /// Write a photo's still into `dir` as `polaroid-<unix millis>.<ext>`
    ///
    /// Returns `Ok(None)` when the id is unknown.
    pub fn export_photo(&self, id: PhotoId, dir: &Path) -> AppResult<Option<PathBuf>> {
        let snapshot = self.store.snapshot();
        let Some(photo) = snapshot.get(id) else {
            return Ok(None);
        };

        let payload = decode_data_url(photo.image_data.as_str())
            .ok_or_else(|| AppError::Export(format!("photo {} has no data URL payload", id)))?;

        std::fs::create_dir_all(dir)?;
        let filename = format!(
            "polaroid-{}.{}",
            Utc::now().timestamp_millis(),
            payload.extension()
        );
        let path = dir.join(filename);
        std::fs::write(&path, &payload.bytes)?;

        info!(%id, path = %path.display(), "Photo exported");
        Ok(Some(path))
    }
}
